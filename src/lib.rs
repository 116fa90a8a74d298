#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use humantime as _;
use tracing_subscriber as _;

mod error;
pub mod parsers;
mod runner;
pub mod search;

pub use error::{Error, GridError, IllegalMove, PlanError, ValidationError};
pub use runner::{run, SolverConfig};
pub use search::{Board, Direction, Plan};

#[cfg(test)]
mod test_utils;
