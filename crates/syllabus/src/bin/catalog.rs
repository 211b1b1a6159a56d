use log::{error, info};
use models::Catalog;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};
use syllabus::{
    CatalogOptions, build_catalog,
    util::{DEFAULT_OUTPUT_DIR, create_csv_writer, ensure_dir},
};

/// Output file names
const CSV_FILE: &str = "catalog.csv";
const JSON_FILE: &str = "catalog.json";
/// Sub-directory receiving one raw text file per course block
const BLOCKS_DIR: &str = "blocks";
/// CSV headers preceding one column per minor
const CSV_HEADERS: [&str; 8] = [
    "code",
    "title",
    "cm_hours",
    "td_hours",
    "hne_hours",
    "total_hours",
    "in_charge",
    "email",
];

/// Writes one row per course, with an `X` under every minor offering it
fn write_csv(catalog: &Catalog, dir: &Path) -> Result<(), csv::Error> {
    let minors = catalog.minors();
    let headers: Vec<&str> = CSV_HEADERS.iter().copied().chain(minors.iter().copied()).collect();

    let mut writer = create_csv_writer(dir, CSV_FILE, &headers)?;
    for course in catalog.iter() {
        let mut record = vec![
            course.code.clone(),
            course.title.clone(),
            course.cm_hours.to_string(),
            course.td_hours.to_string(),
            course.hne_hours.to_string(),
            course.total_hours().to_string(),
            course.in_charge.clone(),
            course.email.clone(),
        ];
        record.extend(
            minors
                .iter()
                .map(|minor| (if course.is_offered_in(minor) { "X" } else { "" }).to_string()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;

    Ok(())
}

fn write_json(catalog: &Catalog, dir: &Path) -> Result<(), String> {
    ensure_dir(dir).map_err(|e| format!("Failed to create {}: {e}", dir.display()))?;

    let json = serde_json::to_string_pretty(catalog)
        .map_err(|e| format!("Failed to serialize catalog: {e}"))?;
    fs::write(dir.join(JSON_FILE), json).map_err(|e| format!("Failed to write {JSON_FILE}: {e}"))
}

/// Parses the syllabus export and dumps the catalog as CSV and JSON
fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let source = env::var("SYLLABUS_PATH").unwrap_or_else(|_| "syll.txt".to_string());
    let output_dir =
        PathBuf::from(env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()));

    let options = CatalogOptions {
        archive_dir: Some(output_dir.join(BLOCKS_DIR)),
    };

    let catalog = match build_catalog(&source, &options) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if let Err(e) = write_csv(&catalog, &output_dir) {
        error!("Failed to write {CSV_FILE}: {e}");
        process::exit(1);
    }

    if let Err(e) = write_json(&catalog, &output_dir) {
        error!("{e}");
        process::exit(1);
    }

    info!(
        "Wrote {} courses to {}",
        catalog.len(),
        output_dir.display()
    );
}
