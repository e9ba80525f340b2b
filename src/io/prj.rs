//! Reader for ESRI `.prj` projection-definition files.

use std::io::Read;

use crate::error::Result;
use crate::spatial_ref::SpatialRef;

/// Read a `.prj` projection file and construct the spatial reference it
/// describes.
///
/// The stream is consumed to its end and interpreted as a WKT coordinate
/// system description.
pub fn read_prj<R: Read>(mut reader: R) -> Result<SpatialRef> {
    let mut wkt = String::new();
    reader.read_to_string(&mut wkt)?;
    SpatialRef::from_wkt(&wkt)
}
