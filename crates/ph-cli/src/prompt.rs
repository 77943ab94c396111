use crate::{CliError, CliResult};

use std::io::{BufRead, BufReader, Stderr, Stdin, Write};

use log::info;
use ph_controller::Confirmed;

/// Interactive y/N confirmation for destructive commands
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<BufReader<Stdin>, Stderr> {
    /// Read answers from stdin; questions go to stderr so stdout stays JSON.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask `question` unless `assume_yes` is set. Anything other than
    /// `y`/`yes` declines, including end of input.
    pub fn confirm(&mut self, question: &str, assume_yes: bool) -> CliResult<Option<Confirmed>> {
        if assume_yes {
            return Ok(Some(Confirmed::assume_yes()));
        }

        write!(self.output, "{question} [y/N] ").map_err(CliError::prompt)?;
        self.output.flush().map_err(CliError::prompt)?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(CliError::prompt)?;

        let accepted = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
        if !accepted {
            info!("Declined: {question}");
        }

        Ok(Confirmed::from_user_answer(accepted))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
