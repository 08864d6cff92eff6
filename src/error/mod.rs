pub mod command;

pub use command::CommandError;
pub use probedict_error::{
    bail, ensure, DictError, ErrorExt, GenericError, ProbeResult, ResultExt, SetError,
    StackError, StatusCode,
};
