use csv::Writer;
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

/// Output directory for data files
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

/// Longest heading kept in error messages
const HEADING_LEN: usize = 60;

lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every whitespace run into a single space and trims the result
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_string()
}

/// Turns a course title into a file name usable on every platform
///
/// # Returns
/// The sanitised name, or `"untitled"` when nothing usable is left
pub fn sanitize_file_name(title: &str) -> String {
    let name = collapse_whitespace(title);
    let name = UNSAFE_FILENAME_CHARS.replace_all(&name, "_");
    let name = name.trim_matches('.');

    if name.is_empty() {
        "untitled".to_string()
    } else {
        name.to_string()
    }
}

/// First non-empty line of a block, shortened for diagnostics
pub fn heading(block: &str) -> String {
    let line = block
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    collapse_whitespace(line).chars().take(HEADING_LEN).collect()
}

/// Ensures a directory exists, creating it if necessary
pub fn ensure_dir(dir_path: &Path) -> io::Result<()> {
    if !dir_path.exists() {
        fs::create_dir_all(dir_path)?;
    }

    Ok(())
}

/// Writes a raw course block to `<dir>/<title>.txt`
///
/// # Returns
/// The path written to
pub fn archive_block(dir: &Path, title: &str, block: &str) -> io::Result<PathBuf> {
    ensure_dir(dir)?;

    let path = dir.join(format!("{}.txt", sanitize_file_name(title)));
    fs::write(&path, block)?;

    Ok(path)
}

/// Creates a CSV writer for `<dir>/<filename>` and writes the header row
pub fn create_csv_writer(
    dir: &Path,
    filename: &str,
    headers: &[&str],
) -> Result<Writer<File>, csv::Error> {
    ensure_dir(dir)?;

    let mut writer = Writer::from_path(dir.join(filename))?;
    writer.write_record(headers)?;

    Ok(writer)
}
