//! Spatial reference descriptions and the unit-system hint extracted from them.

use crate::error::{ProjGeomError, Result};

/// Native coordinate unit of a spatial reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Geographic coordinates in degrees. The projection engine works in
    /// radians, so coordinates on a degrees side are converted around every
    /// projection call.
    Degrees,
    /// Projected or otherwise linear units, handed to the projection engine
    /// untouched.
    Linear,
}

impl UnitSystem {
    /// Detect the unit system of a Proj4-style definition.
    ///
    /// Geographic definitions spell their projection `longlat` (`latlong` in
    /// older GDAL output); everything else is treated as linear.
    pub fn from_proj_string(definition: &str) -> UnitSystem {
        if definition.contains("longlat") || definition.contains("latlong") {
            UnitSystem::Degrees
        } else {
            UnitSystem::Linear
        }
    }
}

/// An opaque coordinate system description.
///
/// Holds the Proj4-style definition that projection handles are built from,
/// plus the WKT it was parsed from when one was supplied. Equality is
/// semantic: two references with the same definition parameters compare
/// equal regardless of parameter order.
#[derive(Debug, Clone)]
pub struct SpatialRef {
    proj_string: String,
    wkt: Option<String>,
}

impl SpatialRef {
    /// Create a spatial reference from a Proj4-style definition such as
    /// `+proj=longlat +datum=NAD83 +no_defs`.
    pub fn from_proj_string(definition: &str) -> Result<SpatialRef> {
        let definition = definition.trim();
        if definition.is_empty() {
            return Err(ProjGeomError::SpatialRef {
                reason: "empty projection definition".to_string(),
            });
        }
        Ok(SpatialRef {
            proj_string: definition.to_string(),
            wkt: None,
        })
    }

    /// Create a spatial reference from a WKT coordinate system description.
    pub fn from_wkt(wkt: &str) -> Result<SpatialRef> {
        let proj_string =
            proj4wkt::wkt_to_projstring(wkt).map_err(|err| ProjGeomError::SpatialRef {
                reason: err.to_string(),
            })?;
        Ok(SpatialRef {
            proj_string,
            wkt: Some(wkt.to_string()),
        })
    }

    /// The Proj4-style form handed to the projection engine.
    pub fn proj_string(&self) -> &str {
        &self.proj_string
    }

    /// The WKT this reference was built from, if any.
    pub fn wkt(&self) -> Option<&str> {
        self.wkt.as_deref()
    }

    /// The native unit system of this reference.
    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::from_proj_string(&self.proj_string)
    }

    /// `true` when the native coordinate unit is degrees.
    pub fn is_geographic(&self) -> bool {
        self.unit_system() == UnitSystem::Degrees
    }

    fn parameter_set(&self) -> Vec<&str> {
        let mut params: Vec<&str> = self.proj_string.split_whitespace().collect();
        params.sort_unstable();
        params.dedup();
        params
    }
}

// Parameter-order-insensitive comparison of the definitions. The WKT origin
// does not participate: two references describing the same system are equal
// however they were constructed.
impl PartialEq for SpatialRef {
    fn eq(&self, other: &SpatialRef) -> bool {
        self.parameter_set() == other.parameter_set()
    }
}

impl Eq for SpatialRef {}
