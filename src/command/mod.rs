//! Text console over a `LinearDict<String, String>`.
//!
//! - `parser`: [`Command`] and its line grammar.
//! - `execute`: running a command against the dictionary.
//! - `reply`: printable [`Reply`] values.
//! - `session`: [`Session`], which drives a stream of lines.

pub mod execute;
pub mod parser;
pub mod reply;
pub mod session;

pub use execute::*;
pub use parser::*;
pub use reply::*;
pub use session::*;
