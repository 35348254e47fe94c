//! TSPLIB `NODE_COORD_SECTION` parsing.

use crate::error::{Result, SearchError};

const COORD_SECTION: &str = "NODE_COORD_SECTION";
const END_OF_FILE: &str = "EOF";

/// Header fields and coordinates read from a TSPLIB file.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Parsed {
    pub name: Option<String>,
    pub coordinates: Vec<(f64, f64)>,
}

/// Extracts `(x, y)` pairs from the `NODE_COORD_SECTION` block, in file
/// order.
///
/// Lines are trimmed. Parsing stops at a line reading `EOF`; lines before
/// the section marker are ignored, as are section lines with fewer than
/// three whitespace-separated tokens. The node id column is not checked.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if an `x` or `y` token is not a finite
/// number.
///
/// # Examples
///
/// ```
/// use tsp_localsearch::instance::parse_coordinates;
///
/// let text = "NAME: tiny\nNODE_COORD_SECTION\n1 0 0\n2 3 4\nEOF\n";
/// assert_eq!(parse_coordinates(text)?, vec![(0.0, 0.0), (3.0, 4.0)]);
/// # Ok::<(), tsp_localsearch::SearchError>(())
/// ```
pub fn parse_coordinates(text: &str) -> Result<Vec<(f64, f64)>> {
    parse(text).map(|parsed| parsed.coordinates)
}

pub(crate) fn parse(text: &str) -> Result<Parsed> {
    let mut parsed = Parsed::default();
    let mut in_section = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line == COORD_SECTION {
            in_section = true;
            continue;
        }
        if line == END_OF_FILE {
            break;
        }

        if !in_section {
            if let Some((key, value)) = line.split_once(':') {
                if key.trim() == "NAME" {
                    parsed.name = Some(value.trim().to_string());
                }
            }
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let x = parse_number(parts[1], idx + 1)?;
        let y = parse_number(parts[2], idx + 1)?;
        parsed.coordinates.push((x, y));
    }

    Ok(parsed)
}

fn parse_number(token: &str, line: usize) -> Result<f64> {
    let value = token.parse::<f64>().map_err(|e| SearchError::Parse {
        line,
        message: format!("invalid coordinate '{token}': {e}"),
    })?;
    if !value.is_finite() {
        return Err(SearchError::Parse {
            line,
            message: format!("coordinate '{token}' is not finite"),
        });
    }
    Ok(value)
}
