//! Fixed label text of the syllabus layout.
//!
//! Every field of a course block sits between two bilingual labels. The whole
//! layout lives in [`ANCHORS`] so a change in the source document only ever
//! touches this table.

/// Phrase present on the first page of every course block
pub const BLOCK_MARKER: &str = "Cours proposé dans la mineure / Course offered in the minor :";

/// Separator between tokens of the availability grid
pub const AVAILABILITY_SEPARATOR: &str = " \n";

/// Separator between lecturer name and email in `name (email)`
pub const EMAIL_OPEN: &str = " (";

/// Fields located through a pair of labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CmHours,
    TdHours,
    HneHours,
    Availability,
    Lecturer,
    Abstract,
    Prerequisites,
    Objective,
    Content,
    References,
    Knowledge,
    Assessment,
    Bibliography,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::CmHours => "cm_hours",
            Self::TdHours => "td_hours",
            Self::HneHours => "hne_hours",
            Self::Availability => "availability",
            Self::Lecturer => "in_charge",
            Self::Abstract => "abstract",
            Self::Prerequisites => "prerequisites",
            Self::Objective => "objective",
            Self::Content => "content",
            Self::References => "references",
            Self::Knowledge => "knowledge",
            Self::Assessment => "assessment",
            Self::Bibliography => "bibliography",
        }
    }
}

/// A field and the labels that surround it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub field: Field,
    /// Label immediately preceding the value
    pub after: &'static str,
    /// Label immediately following the value, `None` for "until end of block"
    pub before: Option<&'static str>,
    /// Optional fields read as `None` when their label is missing
    pub required: bool,
}

impl Anchor {
    const fn required(field: Field, after: &'static str, before: &'static str) -> Self {
        Self {
            field,
            after,
            before: Some(before),
            required: true,
        }
    }

    const fn optional(field: Field, after: &'static str, before: Option<&'static str>) -> Self {
        Self {
            field,
            after,
            before,
            required: false,
        }
    }

    /// Returns the untrimmed text strictly between the two labels.
    ///
    /// The value starts after the first occurrence of `after` and stops at the
    /// first occurrence of `before` that follows it.
    ///
    /// # Errors
    /// The label that could not be found
    pub fn locate<'a>(&self, text: &'a str) -> Result<&'a str, &'static str> {
        let start = text.find(self.after).ok_or(self.after)? + self.after.len();
        let rest = &text[start..];

        match self.before {
            Some(before) => rest.find(before).map(|end| &rest[..end]).ok_or(before),
            None => Ok(rest),
        }
    }
}

/// Label preceding the lecturer, also the end of the availability grid
const IN_CHARGE: &str = "Responsable /  In charge of : ";

pub const ANCHORS: [Anchor; 13] = [
    Anchor::required(Field::CmHours, "CM \n", "h \n"),
    Anchor::required(Field::TdHours, "TD \n", "h \n"),
    Anchor::required(Field::HneHours, "HNE \n", "h \n"),
    Anchor::required(
        Field::Availability,
        "Cours proposé dans la mineure / Course offered in the minor : \n",
        "Responsable /  In charge of :",
    ),
    Anchor::required(Field::Lecturer, IN_CHARGE, ")"),
    Anchor::required(
        Field::Abstract,
        "Résumé / Abstract :",
        "Prérequis / Prerequisite :",
    ),
    Anchor::optional(
        Field::Prerequisites,
        "Prérequis / Prerequisite :",
        Some("Objectifs / Objectives :"),
    ),
    Anchor::required(
        Field::Objective,
        "Objectifs / Objectives :",
        "Contenu / Contents :",
    ),
    Anchor::required(
        Field::Content,
        "Contenu / Contents :",
        "Références / References : ",
    ),
    Anchor::required(
        Field::References,
        "Références / References : ",
        "Acquis / Knowledge : ",
    ),
    Anchor::required(
        Field::Knowledge,
        "Acquis / Knowledge : ",
        "Evaluation / Assessment : ",
    ),
    Anchor::required(
        Field::Assessment,
        "Evaluation / Assessment : ",
        "Bibliographie / Bibliography : ",
    ),
    Anchor::optional(Field::Bibliography, "Bibliographie / Bibliography : ", None),
];

/// Looks up the labels of `field`
pub fn anchor(field: Field) -> &'static Anchor {
    ANCHORS
        .iter()
        .find(|anchor| anchor.field == field)
        .unwrap_or_else(|| unreachable!("every field has an anchor"))
}
