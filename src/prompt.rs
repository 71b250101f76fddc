//! # Interactive Prompts
//!
//! The clone command asks its questions through the [`Prompter`] trait so the
//! same flow runs against a terminal, a pipe, or an in-memory script in tests.
//!
//! - [`LinePrompter`] writes the question, then reads one line from any
//!   `BufRead`. Used whenever stdin or stdout is not a terminal.
//! - [`TermPrompter`] uses `dialoguer` widgets with a themed prompt.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::error::{Error, Result};
use crate::output::OutputConfig;

/// Source of answers for the interactive flow.
pub trait Prompter {
    /// Ask a free-text question. The answer may be empty.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Returns `true` for `yes` or `y`, in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Line-oriented prompter over arbitrary reader and writer.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write the prompt and read one line. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)?.ok_or_else(|| Error::Prompt {
            message: format!("input closed while waiting for: {}", prompt),
        })
    }

    /// Closed input declines.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (yes/no)", prompt))?;
        Ok(answer.is_some_and(|a| is_yes(&a)))
    }
}

/// Terminal prompter built on `dialoguer`.
pub struct TermPrompter {
    theme: Box<dyn Theme>,
}

impl TermPrompter {
    pub fn new(output: &OutputConfig) -> Self {
        let theme: Box<dyn Theme> = if output.use_color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::Prompt {
                message: e.to_string(),
            })
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::Prompt {
                message: e.to_string(),
            })
    }
}

/// Whether both stdin and stdout are attached to a terminal, which is what
/// `dialoguer` needs.
pub fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && console::Term::stdout().is_term()
}

/// Pick the prompter for the current process.
pub fn for_stdio(output: &OutputConfig) -> Box<dyn Prompter> {
    if is_interactive_terminal() {
        Box::new(TermPrompter::new(output))
    } else {
        Box::new(LinePrompter::stdio())
    }
}
