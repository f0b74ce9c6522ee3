//! Export core modules shared across CLI and shell wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;
