//! mc-core: extraction and parsing primitives for the modcheck validators.
//!
//! Everything here is a pure function over text loaded from the game's data
//! files: dialog `.msg` files, compiled `.ssl` script sources, the script
//! registry list, the script numeric-ID header, and the worldmap encounter
//! configuration. The checkers in `mc-check` cross-reference these artifacts
//! and report discrepancies through [`report::CheckReport`].

pub mod dialog;
pub mod header;
pub mod legacy;
pub mod patterns;
pub mod registry;
pub mod report;
pub mod script;
pub mod worldmap;

pub use legacy::read_legacy;
pub use report::CheckReport;
