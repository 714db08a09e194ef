//! Terminal front ends for the extremum search and Romberg crates.
//!
//! The `extremum` binary runs an interactive [`Session`] over stdin and
//! stdout; the `romberg` binary prints a Romberg table for a fixed integrand.
//! Both install the [`logging`] subscriber first, so `RUST_LOG=debug` shows
//! every bracket update on stderr.

mod error;
pub mod logging;
mod prompt;
mod session;
mod table;

pub use error::{CliError, Result};
pub use prompt::Prompt;
pub use session::{Session, objective};
pub use table::render_trace;
