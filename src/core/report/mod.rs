//! Report rendering and export.
//!
//! Renderers produce plain strings; `files` owns the timestamped
//! naming and append-only writes. Export failures surface as
//! `ExportFailure` and never abort the run that produced the data.

pub mod csv;
pub mod files;
pub mod html;
pub mod text;
