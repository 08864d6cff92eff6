use std::str::FromStr;

use crate::error::CommandError;

/// One console instruction.
///
/// Verbs are case-insensitive; keys and values are single
/// whitespace-delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: String, value: String },
    Get { key: String },
    Contains { key: String },
    Del { key: String },
    Size,
    Keys,
    Values,
    Stats,
    Clear,
}

impl Command {
    /// Parses a line, returning `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }

    /// Upper-case verb, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "PUT",
            Command::Get { .. } => "GET",
            Command::Contains { .. } => "CONTAINS",
            Command::Del { .. } => "DEL",
            Command::Size => "SIZE",
            Command::Keys => "KEYS",
            Command::Values => "VALUES",
            Command::Stats => "STATS",
            Command::Clear => "CLEAR",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = tokens.collect();

        let command = match verb.to_ascii_uppercase().as_str() {
            "PUT" => {
                let [key, value] = exact_args::<2>("PUT", &args)?;
                Command::Put {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            "GET" => {
                let [key] = exact_args::<1>("GET", &args)?;
                Command::Get {
                    key: key.to_string(),
                }
            }
            "CONTAINS" => {
                let [key] = exact_args::<1>("CONTAINS", &args)?;
                Command::Contains {
                    key: key.to_string(),
                }
            }
            "DEL" => {
                let [key] = exact_args::<1>("DEL", &args)?;
                Command::Del {
                    key: key.to_string(),
                }
            }
            "SIZE" => no_args("SIZE", &args, Command::Size)?,
            "KEYS" => no_args("KEYS", &args, Command::Keys)?,
            "VALUES" => no_args("VALUES", &args, Command::Values)?,
            "STATS" => no_args("STATS", &args, Command::Stats)?,
            "CLEAR" => no_args("CLEAR", &args, Command::Clear)?,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        Ok(command)
    }
}

fn exact_args<'a, const N: usize>(
    name: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::WrongArgCount(name, N))
}

fn no_args(
    name: &'static str,
    args: &[&str],
    command: Command,
) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::WrongArgCount(name, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_and_lookups() {
        assert_eq!(
            "PUT a 1".parse::<Command>().unwrap(),
            Command::Put {
                key: "a".into(),
                value: "1".into()
            }
        );
        assert_eq!(
            "get a".parse::<Command>().unwrap(),
            Command::Get { key: "a".into() }
        );
        assert_eq!(
            "  Contains   b ".parse::<Command>().unwrap(),
            Command::Contains { key: "b".into() }
        );
        assert_eq!(
            "del n".parse::<Command>().unwrap(),
            Command::Del { key: "n".into() }
        );
    }

    #[test]
    fn test_parse_nullary() {
        assert_eq!("size".parse::<Command>().unwrap(), Command::Size);
        assert_eq!("KEYS".parse::<Command>().unwrap(), Command::Keys);
        assert_eq!("Values".parse::<Command>().unwrap(), Command::Values);
        assert_eq!("STATS".parse::<Command>().unwrap(), Command::Stats);
        assert_eq!("clear".parse::<Command>().unwrap(), Command::Clear);
    }

    #[test]
    fn test_arity_errors() {
        assert_eq!(
            "PUT a".parse::<Command>(),
            Err(CommandError::WrongArgCount("PUT", 2))
        );
        assert_eq!(
            "PUT a b c".parse::<Command>(),
            Err(CommandError::WrongArgCount("PUT", 2))
        );
        assert_eq!(
            "GET".parse::<Command>(),
            Err(CommandError::WrongArgCount("GET", 1))
        );
        assert_eq!(
            "SIZE now".parse::<Command>(),
            Err(CommandError::WrongArgCount("SIZE", 0))
        );
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(
            "SET a 1".parse::<Command>(),
            Err(CommandError::Unknown("SET".into()))
        );
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(Command::parse_line(""), Ok(None));
        assert_eq!(Command::parse_line("   \t"), Ok(None));
        assert_eq!(Command::parse_line("# PUT a 1"), Ok(None));
        assert_eq!(Command::parse_line("size"), Ok(Some(Command::Size)));
    }

    #[test]
    fn test_name() {
        let cmd: Command = "put k v".parse().unwrap();
        assert_eq!(cmd.name(), "PUT");
        assert_eq!(Command::Clear.name(), "CLEAR");
    }
}
