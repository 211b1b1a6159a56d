use serde::Serialize;
use std::str::FromStr;
use strum::{AsRefStr, EnumIter, EnumProperty, EnumString};

/// Colour used for anything without a palette entry
pub const DEFAULT_COLOR: &str = "#888";

/// Minors with a fixed display colour
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, EnumIter, AsRefStr, EnumProperty,
)]
pub enum MinorColor {
    #[strum(serialize = "CyberSec", props(color = "#FF6347"))]
    CyberSec,
    #[strum(serialize = "IHM", props(color = "#4682B4"))]
    Ihm,
    #[strum(serialize = "SSE", props(color = "#32CD32"))]
    Sse,
    #[strum(serialize = "IF", props(color = "#FFD700"))]
    If,
    #[strum(serialize = "IA-ID", props(color = "#8A2BE2"))]
    IaId,
    #[strum(serialize = "IoT-CPS", props(color = "#FF69B4"))]
    IotCps,
}

impl MinorColor {
    pub fn color(&self) -> &'static str {
        self.get_str("color").unwrap_or(DEFAULT_COLOR)
    }

    /// Colour for a minor name, falling back to [`DEFAULT_COLOR`]
    pub fn for_minor(minor: &str) -> &'static str {
        Self::from_str(minor)
            .map(|m| m.color())
            .unwrap_or(DEFAULT_COLOR)
    }
}
