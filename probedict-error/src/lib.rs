pub mod ext;
pub mod macros;
pub mod stack;
pub mod status_code;
pub mod types;

// Re-export everything so callers can simply `use probedict_error::...`.
pub use ext::*;
pub use macros::*;
pub use stack::*;
pub use status_code::*;
pub use types::*;

pub type ProbeResult<T> = Result<T, StackError>;
