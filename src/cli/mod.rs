//! Command-line arguments for folio.

mod args;

pub use args::{Cli, VERSION};
