//! Line-oriented contact assistant.
//!
//! Each input line is `<command> [args...]`; the command word is
//! case-insensitive. Command handlers return `Result<String, BotError>`
//! and [`Bot::handle`] turns either side into the reply text.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::BotError;

/// Greeting printed when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before each command.
pub const PROMPT: &str = "Enter a command: ";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command.
    Continue(String),
    /// Print the text and end the session.
    Quit(String),
}

/// Splits a line into a lower-cased command and its arguments.
///
/// Returns `None` for a blank line.
#[must_use]
pub fn parse_input(input: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

/// Contact book with command handlers, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Bot {
    contacts: Vec<(String, String)>,
}

impl Bot {
    /// Creates a bot with no contacts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one input line and returns the reply.
    pub fn handle(&mut self, input: &str) -> Reply {
        let Some((command, args)) = parse_input(input) else {
            return Reply::Continue("Invalid command.".to_string());
        };
        debug!(command = %command, args = args.len(), "dispatching bot command");

        let result = match command.as_str() {
            "close" | "exit" => return Reply::Quit("Good bye!".to_string()),
            "hello" => Ok("How can I help you?".to_string()),
            "add" => self.add(&args),
            "change" => self.change(&args),
            "phone" => self.phone(&args),
            "all" => Ok(self.all()),
            _ => Ok("Invalid command.".to_string()),
        };
        Reply::Continue(result.unwrap_or_else(|e| e.to_string()))
    }

    /// `add <name> <phone>`: stores or overwrites a contact.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::NameAndPhone`] unless exactly two arguments are given.
    pub fn add(&mut self, args: &[&str]) -> Result<String, BotError> {
        let [name, phone] = args else {
            return Err(BotError::NameAndPhone);
        };
        match self.position(name) {
            Some(i) => self.contacts[i].1 = (*phone).to_string(),
            None => self.contacts.push(((*name).to_string(), (*phone).to_string())),
        }
        Ok("Contact added.".to_string())
    }

    /// `change <name> <phone>`: replaces an existing contact's phone.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::NameAndPhone`] unless exactly two arguments are
    /// given, or [`BotError::ContactNotFound`] for an unknown name.
    pub fn change(&mut self, args: &[&str]) -> Result<String, BotError> {
        let [name, phone] = args else {
            return Err(BotError::NameAndPhone);
        };
        let i = self
            .position(name)
            .ok_or_else(|| BotError::ContactNotFound((*name).to_string()))?;
        self.contacts[i].1 = (*phone).to_string();
        Ok("Contact updated.".to_string())
    }

    /// `phone <name>`: looks up a phone. Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::MissingArgument`] without a name, or
    /// [`BotError::ContactNotFound`] for an unknown name.
    pub fn phone(&self, args: &[&str]) -> Result<String, BotError> {
        let name = args.first().ok_or(BotError::MissingArgument)?;
        self.position(name)
            .map(|i| self.contacts[i].1.clone())
            .ok_or_else(|| BotError::ContactNotFound((*name).to_string()))
    }

    /// `all`: one `name: phone` line per contact.
    #[must_use]
    pub fn all(&self) -> String {
        if self.contacts.is_empty() {
            return "No contacts saved.".to_string();
        }
        self.contacts
            .iter()
            .map(|(name, phone)| format!("{name}: {phone}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|(n, _)| n == name)
    }
}

/// Runs an interactive session until `close`/`exit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(bot: &mut Bot, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{WELCOME}")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        match bot.handle(&line?) {
            Reply::Continue(text) => writeln!(out, "{text}")?,
            Reply::Quit(text) => {
                writeln!(out, "{text}")?;
                return Ok(());
            }
        }
    }
}
