//! Defines [`ProjGeomError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProjGeomError {
    /// A geometry variant outside the supported set was passed to an operation.
    ///
    /// Carries the name of the offending variant.
    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(&'static str),

    /// A spatial reference could not be constructed or serialized.
    #[error("Invalid spatial reference: {reason}")]
    SpatialRef {
        /// What the underlying provider rejected.
        reason: String,
    },

    /// [proj4rs::errors::Error]
    #[error(transparent)]
    Projection(#[from] proj4rs::errors::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, ProjGeomError>;
