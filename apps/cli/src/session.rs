//! Interactive session: the command loop and its handlers.

use std::io::{BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use flashcard_core::{check_answer, CardStore};

use crate::command::Command;
use crate::console::Console;
use crate::error::{Result, SessionError};
use crate::options::Options;

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Exiting,
}

/// One run of the flashcards console.
pub struct Session<R, W> {
    console: Console<R, W>,
    store: CardStore,
    export_path: Option<PathBuf>,
    state: State,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Build a session, loading the startup import file when one is configured.
    pub fn start(options: Options, input: R, output: W) -> Result<Self> {
        let mut session = Self {
            console: Console::new(input, output),
            store: CardStore::new(),
            export_path: options.export,
            state: State::Running,
        };

        if let Some(path) = options.import {
            if path.exists() {
                session.import_from(&path)?;
            } else {
                tracing::warn!("startup import file {} does not exist", path.display());
            }
        }

        Ok(session)
    }

    /// Run the command loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while self.state == State::Running {
            match self.step() {
                Ok(()) => {}
                Err(SessionError::EndOfInput) => {
                    tracing::info!("input closed, exiting");
                    self.state = State::Exiting;
                }
                Err(e) => return Err(e),
            }
        }
        self.finish()
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn step(&mut self) -> Result<()> {
        let input = self.console.prompt(ACTION_PROMPT)?;
        let Some(command) = Command::parse(&input) else {
            return Ok(());
        };
        tracing::debug!(command = command.as_str(), "dispatching");

        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Import => self.import(),
            Command::Export => self.export(),
            Command::Ask => self.ask(),
            Command::Exit => {
                self.state = State::Exiting;
                Ok(())
            }
            Command::Log => self.log(),
            Command::HardestCard => self.hardest_card(),
            Command::ResetStats => self.reset_stats(),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(path) = self.export_path.clone() {
            self.export_to(&path)?;
        }
        self.console.say("Bye bye!")
    }

    fn add(&mut self) -> Result<()> {
        let term = self.console.prompt("The card:")?;
        if self.store.find_by_term(&term).is_some() {
            return self
                .console
                .say(format!("The card \"{}\" already exists.\n", term));
        }

        let definition = self.console.prompt("The definition of the card:")?;
        if self.store.find_by_definition(&definition).is_some() {
            return self
                .console
                .say(format!("The definition \"{}\" already exists.\n", definition));
        }

        match self.store.add(&term, &definition) {
            Ok(()) => self.console.say(format!(
                "The pair (\"{}\":\"{}\") has been added.\n",
                term, definition
            )),
            Err(e) => {
                tracing::error!("add rejected after checks: {}", e);
                Ok(())
            }
        }
    }

    fn remove(&mut self) -> Result<()> {
        let term = self.console.prompt("Which card?")?;
        match self.store.remove(&term) {
            Ok(_) => self.console.say("The card has been removed.\n"),
            Err(_) => self.console.say(format!(
                "Can't remove \"{}\": there is no such card.\n",
                term
            )),
        }
    }

    fn import(&mut self) -> Result<()> {
        let name = self.console.prompt("File name:")?;
        self.import_from(Path::new(&name))
    }

    fn import_from(&mut self, path: &Path) -> Result<()> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return self.console.say("File not found.");
            }
            Err(e) => return self.report_file_error(path, e),
        };

        let report = self.store.import_str(&content);
        tracing::info!(
            path = %path.display(),
            lines = report.lines_read,
            parsed = report.cards_parsed,
            merged = report.cards_merged(),
            replaced = report.cards_replaced,
            rejected = report.cards_rejected,
            "imported card file"
        );
        self.console
            .say(format!("{} cards have been loaded.\n", report.lines_read))
    }

    fn export(&mut self) -> Result<()> {
        let name = self.console.prompt("File name:")?;
        self.export_to(Path::new(&name))
    }

    fn export_to(&mut self, path: &Path) -> Result<()> {
        if let Err(e) = std::fs::write(path, self.store.export_string()) {
            return self.report_file_error(path, e);
        }
        tracing::info!(path = %path.display(), cards = self.store.len(), "exported cards");
        self.console
            .say(format!("{} cards have been saved.\n", self.store.len()))
    }

    fn ask(&mut self) -> Result<()> {
        let input = self.console.prompt("How many times to ask?")?;
        let Ok(count) = input.trim().parse::<usize>() else {
            return self
                .console
                .say(format!("\"{}\" is not a valid number.", input));
        };

        if self.store.is_empty() {
            tracing::warn!("ask requested on an empty store");
        }

        for i in 0..count {
            let Some(asked) = self.store.cycle_index(i).cloned() else {
                break;
            };
            let answer = self
                .console
                .prompt(format!("Print the definition of \"{}\":", asked.term))?;

            let verdict = check_answer(&self.store, &asked, &answer);
            self.console.say(verdict.message())?;
            if !verdict.is_correct() {
                self.store.record_mistake(&asked.term);
            }
        }

        self.console.blank()
    }

    fn log(&mut self) -> Result<()> {
        let name = self.console.prompt("File name:")?;
        let path = Path::new(&name);
        if let Err(e) = self.console.transcript().append_to(path) {
            return self.report_file_error(path, e);
        }
        self.console.say("The log has been saved.")
    }

    fn hardest_card(&mut self) -> Result<()> {
        let report = self.store.hardest();
        self.console.say(report.message())
    }

    fn reset_stats(&mut self) -> Result<()> {
        self.store.reset_all_mistakes();
        self.console.say("Card statistics have been reset.")
    }

    fn report_file_error(&mut self, path: &Path, err: std::io::Error) -> Result<()> {
        tracing::error!(path = %path.display(), "file operation failed: {}", err);
        self.console
            .say(format!("Could not access \"{}\": {}", path.display(), err))
    }
}
