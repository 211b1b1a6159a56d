use crate::anchors::{AVAILABILITY_SEPARATOR, EMAIL_OPEN, Field, anchor};
use models::{Availability, CourseRecord, error::ExtractError};

/// Determines whether an availability token is a layout artefact.
///
/// The availability grid lists minor names and then one marker cell per
/// minor. Marker cells (`"X"` or blank) are short, so every token under
/// three characters is assumed not to be a minor name. A minor whose name is
/// two characters or less is counted as noise as well, which the grid
/// arithmetic in [`parse_availability`] depends on.
pub fn is_layout_noise(token: &str) -> bool {
    token.chars().count() < 3
}

/// Finds the text of `field`, failing on a missing label
fn locate(block: &str, field: Field) -> Result<&str, ExtractError> {
    anchor(field)
        .locate(block)
        .map_err(|missing| ExtractError::MissingAnchor {
            field: field.name(),
            anchor: missing,
        })
}

/// Finds the trimmed text of `field`.
///
/// A missing label is an error for required anchors and `None` for optional
/// ones.
fn text(block: &str, field: Field) -> Result<Option<String>, ExtractError> {
    let anchor = anchor(field);
    match anchor.locate(block) {
        Ok(text) => Ok(Some(text.trim().to_string())),
        Err(_) if !anchor.required => Ok(None),
        Err(missing) => Err(ExtractError::MissingAnchor {
            field: field.name(),
            anchor: missing,
        }),
    }
}

fn narrative(block: &str, field: Field) -> Result<String, ExtractError> {
    Ok(text(block, field)?.unwrap_or_default())
}

/// Parses an hour count; a blank value means no hours
fn hours(block: &str, field: Field) -> Result<u32, ExtractError> {
    let raw = locate(block, field)?.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse().map_err(|_| ExtractError::InvalidHours {
        field: field.name(),
        value: raw.to_string(),
    })
}

/// Sums the three hour counts, rejecting loads that do not fit a `u32`
fn total_hours(cm: u32, td: u32, hne: u32) -> Result<u32, ExtractError> {
    cm.checked_add(td)
        .and_then(|sum| sum.checked_add(hne))
        .ok_or_else(|| ExtractError::InvalidHours {
            field: "total_hours",
            value: format!("{cm} + {td} + {hne}"),
        })
}

/// Returns the trimmed line at `index` (0-based)
fn line(block: &str, index: usize, field: &'static str) -> Result<String, ExtractError> {
    block
        .split('\n')
        .nth(index)
        .map(|line| line.trim().to_string())
        .ok_or(ExtractError::MissingLine {
            field,
            line: index + 1,
        })
}

/// Splits `name (email)` into a name and a lower-cased email
fn lecturer(block: &str) -> Result<(String, String), ExtractError> {
    let segment = locate(block, Field::Lecturer)?;
    let (name, email) = segment
        .split_once(EMAIL_OPEN)
        .ok_or(ExtractError::MissingAnchor {
            field: "email",
            anchor: EMAIL_OPEN,
        })?;

    Ok((name.trim().to_string(), email.trim().to_lowercase()))
}

/// Parses the availability grid.
///
/// The grid is a run of tokens: minor names first, then one marker per
/// minor. With `n` tokens that are not [layout noise](is_layout_noise), the
/// names are the tokens at positions `0..=n` and the marker of name `i` sits
/// at position `i + n + 1`. A marker containing `X` means the course is
/// offered under that minor.
///
/// # Errors
/// [`ExtractError::MalformedAvailability`] if the grid is too short to hold a
/// marker for every name
fn parse_availability(segment: &str) -> Result<Availability, ExtractError> {
    let tokens: Vec<&str> = segment.split(AVAILABILITY_SEPARATOR).collect();
    let named = tokens.iter().filter(|token| !is_layout_noise(token)).count();

    (0..=named)
        .map(|i| {
            let minor = tokens.get(i).map_or("", |token| token.trim());
            let marker = tokens
                .get(i + named + 1)
                .ok_or_else(|| ExtractError::MalformedAvailability {
                    minor: minor.to_string(),
                })?;

            Ok::<_, ExtractError>((minor, marker.contains('X')))
        })
        .collect()
}

/// Extracts a course record from the raw text of one course block.
///
/// The first line is the course code and the second the title; every other
/// field is located through [`ANCHORS`](crate::anchors::ANCHORS). Extraction
/// is a pure function of `block`.
///
/// # Errors
/// An [`ExtractError`] naming the field that could not be located or parsed
pub fn extract(block: &str) -> Result<CourseRecord, ExtractError> {
    let (in_charge, email) = lecturer(block)?;
    let cm_hours = hours(block, Field::CmHours)?;
    let td_hours = hours(block, Field::TdHours)?;
    let hne_hours = hours(block, Field::HneHours)?;
    total_hours(cm_hours, td_hours, hne_hours)?;

    Ok(CourseRecord {
        code: line(block, 0, "code")?,
        title: line(block, 1, "title")?,
        cm_hours,
        td_hours,
        hne_hours,
        in_charge,
        email,
        summary: narrative(block, Field::Abstract)?,
        prerequisites: text(block, Field::Prerequisites)?,
        objective: narrative(block, Field::Objective)?,
        content: narrative(block, Field::Content)?,
        references: narrative(block, Field::References)?,
        knowledge: narrative(block, Field::Knowledge)?,
        assessment: narrative(block, Field::Assessment)?,
        bibliography: text(block, Field::Bibliography)?,
        availability: parse_availability(locate(block, Field::Availability)?)?,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::anchors::BLOCK_MARKER;

    /// Minors as laid out in the syllabus
    pub const MINORS: [&str; 6] = ["CyberSec", "IHM", "SSE", "IF", "IA-ID", "IoT-CPS"];

    /// Renders a course block the way the text export lays it out
    pub fn block(title: &str, hours: [&str; 3], offered: &[&str], lecturer: &str) -> String {
        let names = MINORS.join(" \n");
        let markers = MINORS
            .iter()
            .map(|minor| if offered.contains(minor) { "X" } else { "" })
            .collect::<Vec<_>>()
            .join(" \n");

        format!(
            "SI5-MIN \n{title} \nVolume horaire / Hours : \nCM \n{cm}h \nTD \n{td}h \nHNE \n{hne}h \n\
             {BLOCK_MARKER} \n{names} \n{markers} \n\
             Responsable /  In charge of : {lecturer} \n\
             Résumé / Abstract : About {title}. \n\
             Prérequis / Prerequisite : None \n\
             Objectifs / Objectives : Learn {title}. \n\
             Contenu / Contents : Lectures and labs. \n\
             Références / References : Course notes \n\
             Acquis / Knowledge : Skills \n\
             Evaluation / Assessment : Final exam \n\
             Bibliographie / Bibliography : Some book \n",
            cm = hours[0],
            td = hours[1],
            hne = hours[2],
        )
    }

    pub fn sample_block(title: &str, offered: &[&str]) -> String {
        block(
            title,
            ["12", "8", ""],
            offered,
            "Jean Dupont (Jean.Dupont@Univ-Cotedazur.FR)",
        )
    }
}
