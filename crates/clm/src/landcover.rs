// crate modules
use crate::error::{Error, Result};

/// Number of vegetation class columns in a CLM vegm file
pub const VEGETATION_CLASSES: usize = 18;

/// NLCD land cover codes and their zero-based vegetation class columns
const NLCD_CLASSES: [(i32, usize); 11] = [
    (11, 16), // open water
    (12, 14), // perennial ice and snow
    (22, 12), // developed, low intensity
    (31, 15), // barren land
    (41, 2),  // deciduous forest
    (42, 0),  // evergreen forest
    (43, 4),  // mixed forest
    (52, 6),  // shrub
    (71, 9),  // grassland
    (82, 11), // cultivated crops
    (90, 10), // woody wetlands
];

/// MODIS IGBP types and their zero-based vegetation class columns
///
/// IGBP numbers the classes from 1 with water at 0, so the table is a plain
/// shift of every type down one column and water to the last mapped slot.
const MODIS_CLASSES: [(i32, usize); 17] = [
    (0, 16),
    (1, 0),
    (2, 1),
    (3, 2),
    (4, 3),
    (5, 4),
    (6, 5),
    (7, 6),
    (8, 7),
    (9, 8),
    (10, 9),
    (11, 10),
    (12, 11),
    (13, 12),
    (14, 13),
    (15, 14),
    (16, 15),
];

/// Supported land cover classification schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// National Land Cover Database class codes
    Nlcd,
    /// MODIS IGBP land cover types
    Modis,
}

impl Classification {
    /// Zero-based vegetation class column for a land cover code
    ///
    /// Codes outside the classification give `None` rather than a default
    /// class, so a raster in the wrong scheme fails loudly.
    ///
    /// ```rust
    /// # use htools_clm::Classification;
    /// assert_eq!(Classification::Nlcd.column(42), Some(0));
    /// assert_eq!(Classification::Nlcd.column(7), None);
    /// ```
    pub fn column(&self, code: i32) -> Option<usize> {
        let classes: &[(i32, usize)] = match self {
            Self::Nlcd => &NLCD_CLASSES,
            Self::Modis => &MODIS_CLASSES,
        };

        classes
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, column)| *column)
    }
}

impl std::str::FromStr for Classification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "nlcd" => Ok(Self::Nlcd),
            "modis" => Ok(Self::Modis),
            _ => Err(Error::UnknownClassification(s.to_string())),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
