//! Problem instances loaded from TSPLIB coordinate files.

mod tsplib;

pub use tsplib::parse_coordinates;

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::tour::DistanceMatrix;

/// A named set of city coordinates.
///
/// City `i` is the `i`-th coordinate line of the file, whatever id the
/// file gives it.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: String,
    pub coordinates: Vec<(f64, f64)>,
}

impl Instance {
    pub fn new(name: impl Into<String>, coordinates: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    /// Reads a TSPLIB file. The `NAME` header names the instance; without
    /// it the file stem is used.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let parsed = tsplib::parse(&text)?;
        let name = parsed.name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        info!(
            event = "instance_loaded",
            name = %name,
            cities = parsed.coordinates.len(),
            path = %path.display(),
        );
        Ok(Self::new(name, parsed.coordinates))
    }

    /// Parses TSPLIB text directly.
    pub fn from_tsplib_str(name: impl Into<String>, text: &str) -> Result<Self> {
        let parsed = tsplib::parse(text)?;
        let name = parsed.name.unwrap_or_else(|| name.into());
        Ok(Self::new(name, parsed.coordinates))
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Rounded Euclidean distance matrix of the instance.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&self.coordinates)
    }
}
