//! Geometry transform dispatcher: applies a coordinate transform to every
//! position of a geometry and rebuilds a value of the same shape.

use geo_types::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon};

use crate::error::{ProjGeomError, Result};

pub(crate) fn geometry_variant_name(geom: &Geometry) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Apply `f` to every coordinate of `geom`, producing a new geometry of
/// identical shape: same variant, same nesting, same point count per ring
/// and part, in the original order.
///
/// Supported variants are `Point`, `LineString`, `Polygon`,
/// `MultiLineString`, and `MultiPolygon`; anything else fails with
/// [`ProjGeomError::UnsupportedGeometry`]. The operation is all-or-nothing:
/// the first coordinate `f` rejects aborts the whole transform and no
/// partial geometry is returned.
pub fn transform_geometry<F>(geom: &Geometry, mut f: F) -> Result<Geometry>
where
    F: FnMut(f64, f64) -> Result<(f64, f64)>,
{
    match geom {
        Geometry::Point(point) => {
            let (x, y) = f(point.x(), point.y())?;
            Ok(Geometry::Point(Point::new(x, y)))
        }
        Geometry::LineString(line) => Ok(Geometry::LineString(transform_line_string(
            line, &mut f,
        )?)),
        Geometry::Polygon(polygon) => Ok(Geometry::Polygon(transform_polygon(polygon, &mut f)?)),
        Geometry::MultiLineString(lines) => {
            let mut parts = Vec::with_capacity(lines.0.len());
            for line in &lines.0 {
                parts.push(transform_line_string(line, &mut f)?);
            }
            Ok(Geometry::MultiLineString(MultiLineString::new(parts)))
        }
        Geometry::MultiPolygon(polygons) => {
            let mut parts = Vec::with_capacity(polygons.0.len());
            for polygon in &polygons.0 {
                parts.push(transform_polygon(polygon, &mut f)?);
            }
            Ok(Geometry::MultiPolygon(MultiPolygon::new(parts)))
        }
        unsupported => Err(ProjGeomError::UnsupportedGeometry(geometry_variant_name(
            unsupported,
        ))),
    }
}

fn transform_line_string<F>(line: &LineString, f: &mut F) -> Result<LineString>
where
    F: FnMut(f64, f64) -> Result<(f64, f64)>,
{
    let mut coords = Vec::with_capacity(line.0.len());
    for coord in &line.0 {
        let (x, y) = f(coord.x, coord.y)?;
        coords.push(Coord { x, y });
    }
    Ok(LineString::new(coords))
}

// Exterior ring first, then interior rings in their original order.
fn transform_polygon<F>(polygon: &Polygon, f: &mut F) -> Result<Polygon>
where
    F: FnMut(f64, f64) -> Result<(f64, f64)>,
{
    let exterior = transform_line_string(polygon.exterior(), f)?;
    let mut interiors = Vec::with_capacity(polygon.interiors().len());
    for ring in polygon.interiors() {
        interiors.push(transform_line_string(ring, f)?);
    }
    Ok(Polygon::new(exterior, interiors))
}
