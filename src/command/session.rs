use std::io::{self, BufRead, Write};

use probedict_error::{ProbeResult, ResultExt};
use tracing::{debug, warn};

use super::{Command, StringDict};
use crate::config::Settings;

/// Line-oriented console over a single [`StringDict`].
#[derive(Debug, Default)]
pub struct Session {
    dict: StringDict,
    executed: u64,
    errors: u64,
}

impl Session {
    pub fn new(dict: StringDict) -> Self {
        Session {
            dict,
            executed: 0,
            errors: 0,
        }
    }

    /// Builds the dictionary described by `settings.dict`.
    pub fn from_settings(settings: &Settings) -> ProbeResult<Self> {
        let dict = StringDict::with_config(&settings.dict)
            .context("building dictionary from settings")?;
        Ok(Self::new(dict))
    }

    /// Parses and executes one line.
    ///
    /// Returns the text to print, or `None` for blank and comment lines.
    /// Parse errors are rendered as `(error) ...` and counted.
    pub fn execute_line(
        &mut self,
        line: &str,
    ) -> Option<String> {
        match Command::parse_line(line) {
            Ok(None) => None,
            Ok(Some(command)) => {
                let reply = command.execute(&mut self.dict);
                self.executed += 1;
                debug!(command = command.name(), len = self.dict.len(), "executed");
                Some(reply.to_string())
            }
            Err(e) => {
                self.errors += 1;
                warn!(line = line.trim(), error = %e, "rejected command");
                Some(format!("(error) {e}"))
            }
        }
    }

    /// Feeds every line of `input` through [`Session::execute_line`],
    /// writing each reply on its own line of `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> io::Result<()> {
        for line in input.lines() {
            if let Some(text) = self.execute_line(&line?) {
                writeln!(output, "{text}")?;
            }
        }
        output.flush()
    }

    pub fn dict(&self) -> &StringDict {
        &self.dict
    }

    /// Number of commands executed successfully.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Number of lines rejected by the parser.
    pub fn errors(&self) -> u64 {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use probedict_error::{DictError, StatusCode};

    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::default();
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_script() {
        let (session, out) = run_script(
            "# demo\nPUT a 1\nPUT b 2\n\nGET a\nGET zz\nBOGUS\nSIZE\n",
        );

        assert_eq!(
            out,
            "OK\nOK\n\"1\"\n(nil)\n(error) unknown command 'BOGUS'\n(integer) 2\n"
        );
        assert_eq!(session.executed(), 5);
        assert_eq!(session.errors(), 1);
        assert_eq!(session.dict().len(), 2);
    }

    #[test]
    fn test_from_settings_uses_dict_config() {
        let mut settings = Settings::default();
        settings.dict.initial_capacity = 7;
        let session = Session::from_settings(&settings).unwrap();
        assert_eq!(session.dict().capacity(), 7);
    }

    #[test]
    fn test_from_settings_rejects_negative_capacity() {
        let mut settings = Settings::default();
        settings.dict.initial_capacity = -1;
        let err = Session::from_settings(&settings).unwrap_err();

        assert_eq!(err.status_code(), StatusCode::InvalidArgs);
        assert_eq!(
            err.downcast_ref::<DictError>(),
            Some(&DictError::NegativeCapacity { capacity: -1 })
        );
        assert_eq!(err.contexts().len(), 1);
    }
}
