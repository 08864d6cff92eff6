//! Runtime settings: dictionary defaults and logging.

pub mod settings;

pub use settings::*;
