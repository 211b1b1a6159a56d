use models::error::CatalogError;
use std::{fs, path::Path};

/// Page separator of text exports (`pdftotext` ends every page with one)
pub const PAGE_BREAK: char = '\x0c';

/// Splits a text export into pages
pub fn split_pages(text: &str) -> Vec<&str> {
    text.split(PAGE_BREAK).collect()
}

/// Reads a text export of the syllabus and returns its pages
///
/// # Errors
/// [`CatalogError::SourceUnavailable`] if the file cannot be read
pub fn load_pages(path: impl AsRef<Path>) -> Result<Vec<String>, CatalogError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CatalogError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_pages(&text).into_iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_pages() {
        assert_eq!(split_pages("one\x0ctwo\x0c"), ["one", "two", ""]);
        assert_eq!(split_pages("single"), ["single"]);
    }

    #[test]
    fn test_load_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first\x0csecond\x0c").unwrap();

        let pages = load_pages(file.path()).unwrap();
        assert_eq!(pages, ["first", "second", ""]);
    }

    #[test]
    fn test_missing_source() {
        assert!(matches!(
            load_pages("/no/such/syllabus.txt"),
            Err(CatalogError::SourceUnavailable { .. })
        ));
    }
}
