use super::{Command, Reply};
use crate::database::LinearDict;

/// Dictionary driven by the console.
pub type StringDict = LinearDict<String, String>;

impl Command {
    /// Runs the command against `dict`. Never fails: a missing key is
    /// [`Reply::Nil`].
    pub fn execute(
        &self,
        dict: &mut StringDict,
    ) -> Reply {
        match self {
            Command::Put { key, value } => {
                dict.put(key.clone(), value.clone());
                Reply::Ok
            }
            Command::Get { key } => match dict.get(key) {
                Some(value) => Reply::Value(value.clone()),
                None => Reply::Nil,
            },
            Command::Contains { key } => Reply::Bool(dict.contains(key)),
            Command::Del { key } => match dict.remove(key) {
                Some(value) => Reply::Value(value),
                None => Reply::Nil,
            },
            Command::Size => Reply::Int(dict.len()),
            Command::Keys => Reply::List(dict.key_set().into_vec()),
            Command::Values => Reply::List(dict.value_set().into_vec()),
            Command::Stats => Reply::Stats {
                len: dict.len(),
                capacity: dict.capacity(),
                tombstones: dict.tombstones(),
                load_factor: dict.load_factor(),
            },
            Command::Clear => {
                dict.clear();
                Reply::Ok
            }
        }
    }
}
