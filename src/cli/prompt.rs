//! Line-oriented prompting with explicit cancellation.
//!
//! Every prompt resolves to a [`Prompt`]: either a validated value or
//! `Cancelled` when the user typed the cancel token (or input ended).
//! Invalid input is reported and the prompt repeats.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::debug;

/// Outcome of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    /// User supplied valid input
    Value(T),

    /// User cancelled, or input is exhausted
    Cancelled,
}

impl<T> Prompt<T> {
    /// The value, or `None` if cancelled
    pub fn value(self) -> Option<T> {
        match self {
            Prompt::Value(v) => Some(v),
            Prompt::Cancelled => None,
        }
    }
}

/// Source of input lines
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, `None` at end of input
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Reads lines from standard input
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl LineSource for StdinSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("Failed to read from stdin")
    }
}

/// Replays a fixed list of lines, for tests and scripted sessions
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl LineSource for ScriptedSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Writes prompts and reads validated answers
pub struct Prompter<S, W> {
    source: S,
    out: W,
    cancel_token: String,
}

impl<S: LineSource, W: Write> Prompter<S, W> {
    pub fn new(source: S, out: W, cancel_token: impl Into<String>) -> Self {
        Self {
            source,
            out,
            cancel_token: cancel_token.into(),
        }
    }

    pub fn cancel_token(&self) -> &str {
        &self.cancel_token
    }

    /// Consume the prompter, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print a line of output
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{}", message).context("Failed to write output")
    }

    /// Prompt until `parse` accepts the trimmed input or the user cancels.
    ///
    /// Rejections are printed as `>> Error: <reason>` before prompting again.
    pub async fn ask<T, E, F>(&mut self, message: &str, mut parse: F) -> Result<Prompt<T>>
    where
        E: Display,
        F: FnMut(&str) -> Result<T, E>,
    {
        loop {
            write!(self.out, "{}", message).context("Failed to write prompt")?;
            self.out.flush().context("Failed to flush prompt")?;

            let Some(line) = self.source.next_line().await? else {
                debug!("Input exhausted");
                return Ok(Prompt::Cancelled);
            };

            let input = line.trim();
            if input == self.cancel_token {
                return Ok(Prompt::Cancelled);
            }

            match parse(input) {
                Ok(value) => return Ok(Prompt::Value(value)),
                Err(reason) => self.say(format!(">> Error: {}", reason))?,
            }
        }
    }

    /// Prompt for any line of input
    pub async fn ask_line(&mut self, message: &str) -> Result<Prompt<String>> {
        self.ask(message, |s| Ok::<_, Infallible>(s.to_string()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::validate;

    fn prompter(lines: &[&str]) -> Prompter<ScriptedSource, Vec<u8>> {
        Prompter::new(ScriptedSource::new(lines.iter().copied()), Vec::new(), "-1")
    }

    fn output(p: Prompter<ScriptedSource, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_ask_trims_input() {
        let mut p = prompter(&["  Dune  "]);
        let answer = p.ask_line("Title: ").await.unwrap();
        assert_eq!(answer, Prompt::Value("Dune".to_string()));
        assert_eq!(output(p), "Title: ");
    }

    #[tokio::test]
    async fn test_ask_reprompts_on_invalid_input() {
        let mut p = prompter(&["", "Al", "Austen"]);
        let answer = p
            .ask("Author: ", |s| validate::author(s).map(str::to_string))
            .await
            .unwrap();

        assert_eq!(answer, Prompt::Value("Austen".to_string()));
        assert_eq!(
            output(p),
            "Author: >> Error: Name must be 3+ characters.\n\
             Author: >> Error: Name must be 3+ characters.\n\
             Author: "
        );
    }

    #[tokio::test]
    async fn test_cancel_token() {
        let mut p = prompter(&[" -1 ", "never read"]);
        let answer = p.ask_line("Choice: ").await.unwrap();
        assert_eq!(answer, Prompt::Cancelled);
    }

    #[tokio::test]
    async fn test_end_of_input_cancels() {
        let mut p = prompter(&[]);
        assert_eq!(p.ask_line("Choice: ").await.unwrap(), Prompt::Cancelled);
        assert_eq!(p.ask_line("Choice: ").await.unwrap(), Prompt::Cancelled);
    }

    #[test]
    fn test_prompt_value() {
        assert_eq!(Prompt::Value(3).value(), Some(3));
        assert_eq!(Prompt::<i32>::Cancelled.value(), None);
    }
}
