//! Line-oriented command shell over a [`FileSystem`].

pub mod commands;

use std::io::{self, BufRead, Write};

use crate::filesystem::FileSystem;
use commands::{CommandContext, CommandDispatcher};

/// One interactive or scripted session
pub struct Shell {
    dispatcher: CommandDispatcher,
    context: CommandContext,
    prompt: String,
}

impl Shell {
    pub fn new(filesystem: FileSystem, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(),
            context: CommandContext::new(filesystem),
            prompt: prompt.into(),
        }
    }

    pub fn filesystem(&self) -> &FileSystem {
        &self.context.filesystem
    }

    /// Run a single command line and return what it printed
    pub fn execute(&mut self, line: &str) -> String {
        self.dispatcher.execute(line, &mut self.context)
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// The prompt is written before every line when `interactive` is set.
    /// Returns the number of commands executed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W, interactive: bool) -> io::Result<usize> {
        let mut executed = 0;
        let mut lines = input.lines();

        loop {
            if interactive {
                write!(output, "{}", self.prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let command = line.trim();

            if command == "exit" {
                writeln!(output, "Exiting file system CLI.")?;
                break;
            }
            if command.is_empty() {
                continue;
            }

            output.write_all(self.execute(command).as_bytes())?;
            executed += 1;
        }

        output.flush()?;
        log::info!("Shell session finished after {} commands", executed);
        Ok(executed)
    }

    pub fn into_filesystem(self) -> FileSystem {
        self.context.into_filesystem()
    }
}
