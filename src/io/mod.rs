//! Readers for projection-definition files.

pub mod prj;
