//! mc-check: the four consistency checkers.
//!
//! Each checker is an entry function taking its input paths explicitly and
//! returning a [`mc_core::CheckReport`]; the binaries under `src/bin` are
//! thin clap wrappers that print the report and turn it into an exit code.

pub mod dialogs;
pub mod lvars;
pub mod scripts_lst;
pub mod worldmap;
