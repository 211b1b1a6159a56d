use crate::{
    extract::extract,
    segment::{is_course_block, segment},
    source::load_pages,
    util::{archive_block, heading},
};
use log::{debug, info, warn};
use models::{
    Catalog, CourseRecord,
    error::{CatalogError, ExtractError},
};
use std::path::{Path, PathBuf};

/// Knobs for a catalog build
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// When set, every course block is also written verbatim to
    /// `<archive_dir>/<title>.txt`
    pub archive_dir: Option<PathBuf>,
}

/// Checks a record against the minors of the first record of the catalog
fn check_minors(first: &CourseRecord, course: &CourseRecord) -> Result<(), ExtractError> {
    if first.availability.same_minors(&course.availability) {
        return Ok(());
    }

    Err(ExtractError::AvailabilityMismatch {
        expected: first.availability.minors().map(str::to_string).collect(),
        found: course.availability.minors().map(str::to_string).collect(),
    })
}

/// Builds a catalog from in-memory page texts.
///
/// Blocks are extracted in document order and the first malformed block
/// aborts the whole build. Front matter preceding the first course is
/// skipped.
///
/// # Errors
/// [`CatalogError::MalformedBlock`] for the first block that fails extraction
/// or lists a different set of minors than the first course
pub fn build_catalog_from_pages<I>(pages: I, options: &CatalogOptions) -> Result<Catalog, CatalogError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut courses: Vec<CourseRecord> = Vec::new();

    for (index, block) in segment(pages).enumerate() {
        if !is_course_block(&block) {
            debug!("Skipping {} bytes of front matter", block.len());
            continue;
        }

        let malformed = |source: ExtractError| CatalogError::MalformedBlock {
            index,
            heading: heading(&block),
            source,
        };

        let course = extract(&block).map_err(malformed)?;
        if let Some(first) = courses.first() {
            check_minors(first, &course).map_err(malformed)?;
        }

        if let Some(dir) = &options.archive_dir
            && let Err(e) = archive_block(dir, &course.title, &block)
        {
            warn!("Failed to archive block for {}: {e}", course.title);
        }

        debug!("Parsed {} - {}", course.code, course.title);
        courses.push(course);
    }

    info!("Parsed {} courses", courses.len());
    Ok(Catalog::new(courses))
}

/// Builds the catalog from a text export of the syllabus
///
/// # Errors
/// [`CatalogError::SourceUnavailable`] if the export cannot be read, or any
/// error of [`build_catalog_from_pages`]
pub fn build_catalog(path: impl AsRef<Path>, options: &CatalogOptions) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    info!("Reading syllabus from {}", path.display());

    let pages = load_pages(path)?;
    build_catalog_from_pages(pages, options)
}
