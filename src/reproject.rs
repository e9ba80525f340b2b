//! Coordinate transforms between a pair of spatial references.

use geo_types::Geometry;
use proj4rs::Proj;

use crate::error::{ProjGeomError, Result};
use crate::spatial_ref::{SpatialRef, UnitSystem};
use crate::transform::transform_geometry;

/// Projection handle and unit system for one side of a transform.
struct ProjectionSide {
    proj: Proj,
    unit: UnitSystem,
}

impl ProjectionSide {
    fn new(spatial_ref: &SpatialRef) -> Result<ProjectionSide> {
        let definition = spatial_ref.proj_string();
        let proj =
            Proj::from_proj_string(definition).map_err(|err| ProjGeomError::SpatialRef {
                reason: format!("{definition}: {err}"),
            })?;
        Ok(ProjectionSide {
            proj,
            unit: spatial_ref.unit_system(),
        })
    }
}

struct Pipeline {
    src: ProjectionSide,
    dst: ProjectionSide,
}

impl Pipeline {
    // The engine expects radians on geographic sides; linear units pass
    // through untouched.
    fn project(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let mut coord = (x, y, 0.0);
        if self.src.unit == UnitSystem::Degrees {
            coord.0 = coord.0.to_radians();
            coord.1 = coord.1.to_radians();
        }
        proj4rs::transform::transform(&self.src.proj, &self.dst.proj, &mut coord)?;
        if self.dst.unit == UnitSystem::Degrees {
            coord.0 = coord.0.to_degrees();
            coord.1 = coord.1.to_degrees();
        }
        Ok((coord.0, coord.1))
    }
}

/// A reusable transform from one spatial reference to another.
///
/// Constructed once per pair of references and reused across any number of
/// [`reproject`](CoordinateTransform::reproject) calls. When the two
/// references compare equal the transform is the identity: no projection
/// handles are built and geometries pass through untouched. Holds no
/// mutable state after construction, so a single instance can serve
/// concurrent callers.
pub struct CoordinateTransform {
    // `None` encodes the identity transform.
    pipeline: Option<Pipeline>,
}

impl std::fmt::Debug for CoordinateTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinateTransform")
            .field("identity", &self.pipeline.is_none())
            .finish()
    }
}

impl CoordinateTransform {
    /// Build a transform from `src` to `dst`.
    ///
    /// Construction is all-or-nothing: a definition either side rejects
    /// leaves no usable transform.
    pub fn new(src: &SpatialRef, dst: &SpatialRef) -> Result<CoordinateTransform> {
        if src == dst {
            return Ok(CoordinateTransform { pipeline: None });
        }
        let pipeline = Pipeline {
            src: ProjectionSide::new(src)?,
            dst: ProjectionSide::new(dst)?,
        };
        Ok(CoordinateTransform {
            pipeline: Some(pipeline),
        })
    }

    /// `true` when source and destination compare equal and
    /// [`reproject`](CoordinateTransform::reproject) returns its input
    /// unchanged.
    pub fn is_identity(&self) -> bool {
        self.pipeline.is_none()
    }

    /// Reproject one geometry, producing a new geometry of identical shape.
    ///
    /// Fails with [`ProjGeomError::UnsupportedGeometry`] for variants
    /// outside the supported set and propagates projection-engine errors
    /// (such as coordinates outside the target projection's domain)
    /// verbatim. On failure no partial geometry is returned.
    pub fn reproject(&self, geom: Geometry) -> Result<Geometry> {
        match &self.pipeline {
            None => Ok(geom),
            Some(pipeline) => transform_geometry(&geom, |x, y| pipeline.project(x, y)),
        }
    }

    /// Reproject a nullable geometry. `None` passes through with no error
    /// and no projection-engine call.
    pub fn reproject_opt(&self, geom: Option<Geometry>) -> Result<Option<Geometry>> {
        match geom {
            None => Ok(None),
            Some(geom) => self.reproject(geom).map(Some),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls0;
    use crate::test::multilinestring::mls0;
    use crate::test::multipolygon::mp0;
    use crate::test::point::p0;
    use crate::test::polygon::poly1;
    use crate::test::spatial_ref::{geographic, utm15};
    use approx::assert_relative_eq;
    use geo_types::{point, MultiPoint};

    fn fixtures() -> Vec<Geometry> {
        vec![
            Geometry::Point(p0()),
            Geometry::LineString(ls0()),
            Geometry::Polygon(poly1()),
            Geometry::MultiLineString(mls0()),
            Geometry::MultiPolygon(mp0()),
        ]
    }

    #[test]
    fn identity_returns_input_unchanged() {
        let transform = CoordinateTransform::new(&geographic(), &geographic()).unwrap();
        assert!(transform.is_identity());
        for geom in fixtures() {
            let out = transform.reproject(geom.clone()).unwrap();
            assert_eq!(out, geom);
        }
    }

    #[test]
    fn identity_point_is_exact() {
        let transform = CoordinateTransform::new(&geographic(), &geographic()).unwrap();
        let out = transform
            .reproject(Geometry::Point(point!(x: -93.09, y: 44.94)))
            .unwrap();
        assert_eq!(out, Geometry::Point(point!(x: -93.09, y: 44.94)));
    }

    #[test]
    fn identity_ignores_parameter_order() {
        let a = SpatialRef::from_proj_string("+proj=longlat +datum=NAD83 +no_defs").unwrap();
        let b = SpatialRef::from_proj_string("+no_defs +proj=longlat +datum=NAD83").unwrap();
        let transform = CoordinateTransform::new(&a, &b).unwrap();
        assert!(transform.is_identity());
    }

    #[test]
    fn geographic_to_projected_line_string() {
        let transform = CoordinateTransform::new(&geographic(), &utm15()).unwrap();
        assert!(!transform.is_identity());
        let out = transform.reproject(Geometry::LineString(ls0())).unwrap();
        let Geometry::LineString(out) = out else {
            panic!("expected a line string, got {out:?}");
        };
        assert_eq!(out.0.len(), 2);
        // UTM zone 15N coordinates for the Twin Cities: eastings near the
        // 500 km central-meridian offset, northings around 4 980 km.
        for coord in &out.0 {
            assert!(coord.x > 1.0e5 && coord.x < 1.0e6, "easting {}", coord.x);
            assert!(coord.y > 1.0e6 && coord.y < 1.0e7, "northing {}", coord.y);
        }
    }

    #[test]
    fn round_trip_all_shapes() {
        let forward = CoordinateTransform::new(&geographic(), &utm15()).unwrap();
        let inverse = CoordinateTransform::new(&utm15(), &geographic()).unwrap();
        for geom in fixtures() {
            let projected = forward.reproject(geom.clone()).unwrap();
            let back = inverse.reproject(projected).unwrap();
            match (geom, back) {
                (Geometry::Point(before), Geometry::Point(after)) => {
                    assert_relative_eq!(after.x(), before.x(), epsilon = 1e-6);
                    assert_relative_eq!(after.y(), before.y(), epsilon = 1e-6);
                }
                (Geometry::LineString(before), Geometry::LineString(after)) => {
                    assert_coords_close(&before.0, &after.0);
                }
                (Geometry::Polygon(before), Geometry::Polygon(after)) => {
                    assert_coords_close(&before.exterior().0, &after.exterior().0);
                    for (b, a) in before.interiors().iter().zip(after.interiors()) {
                        assert_coords_close(&b.0, &a.0);
                    }
                }
                (Geometry::MultiLineString(before), Geometry::MultiLineString(after)) => {
                    for (b, a) in before.0.iter().zip(&after.0) {
                        assert_coords_close(&b.0, &a.0);
                    }
                }
                (Geometry::MultiPolygon(before), Geometry::MultiPolygon(after)) => {
                    for (b, a) in before.0.iter().zip(&after.0) {
                        assert_coords_close(&b.exterior().0, &a.exterior().0);
                    }
                }
                (before, after) => panic!("shape changed: {before:?} -> {after:?}"),
            }
        }
    }

    fn assert_coords_close(before: &[geo_types::Coord], after: &[geo_types::Coord]) {
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn absent_geometry_passes_through() {
        let identity = CoordinateTransform::new(&geographic(), &geographic()).unwrap();
        let projected = CoordinateTransform::new(&geographic(), &utm15()).unwrap();
        assert!(identity.reproject_opt(None).unwrap().is_none());
        assert!(projected.reproject_opt(None).unwrap().is_none());
    }

    #[test]
    fn reproject_opt_delegates_for_present_geometries() {
        let transform = CoordinateTransform::new(&geographic(), &utm15()).unwrap();
        let out = transform
            .reproject_opt(Some(Geometry::Point(p0())))
            .unwrap()
            .unwrap();
        let Geometry::Point(out) = out else {
            panic!("expected a point, got {out:?}");
        };
        assert!(out.x() > 1.0e5);
    }

    #[test]
    fn malformed_definition_fails_construction() {
        let bogus = SpatialRef::from_proj_string("+proj=nosuchprojection +foo=1").unwrap();
        let err = CoordinateTransform::new(&geographic(), &bogus).unwrap_err();
        assert!(matches!(err, ProjGeomError::SpatialRef { .. }));
    }

    #[test]
    fn unsupported_geometry_is_rejected() {
        let transform = CoordinateTransform::new(&geographic(), &utm15()).unwrap();
        let err = transform
            .reproject(Geometry::MultiPoint(MultiPoint::new(vec![p0()])))
            .unwrap_err();
        assert!(matches!(
            err,
            ProjGeomError::UnsupportedGeometry("MultiPoint")
        ));
    }
}
