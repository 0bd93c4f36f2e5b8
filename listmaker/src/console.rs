//! Interactive menu loop over a [`ListSession`].
//!
//! Commands are single letters, case-insensitive:
//!
//! | Key | Action |
//! |-----|--------|
//! | O   | open a list file (offers to save unsaved edits first) |
//! | S   | save the list (only when there are unsaved edits) |
//! | A   | add an item |
//! | D   | delete an item by number |
//! | C   | clear the list (after confirmation) |
//! | V   | view the list |
//! | Q   | quit (offers to save, then asks to confirm) |
//!
//! Load and save failures are printed and the session carries on with its
//! in-memory list unchanged. End of input ends the loop with an error.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::core::header::render_header;
use crate::core::rules::Pattern;
use crate::error::{ListError, ListResult};
use crate::io::chooser::FileChooser;
use crate::io::input::InputReader;
use crate::session::ListSession;

const BANNER: &str = "List Maker";
const MENU_HEADER: &str = "---- List Maker Menu ----";
const DEFAULT_LIST_TITLE: &str = "My To Do List";
const MENU_CHOICE_PATTERN: &str = "[OoSsAaDdCcVvQq]";
const LIST_NAME_PATTERN: &str = r"[\w\- ][\w\-. ]*";

const MENU: [&str; 7] = [
    "O - Open a list file from disk",
    "S - Save the current list to disk",
    "A - Add an item to the list",
    "D - Delete an item from the list",
    "C - Remove all items from the current list",
    "V - View the list",
    "Q - Quit the program",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    Add,
    Delete,
    Clear,
    View,
    Quit,
}

impl Command {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.to_ascii_uppercase().as_str() {
            "O" => Some(Self::Open),
            "S" => Some(Self::Save),
            "A" => Some(Self::Add),
            "D" => Some(Self::Delete),
            "C" => Some(Self::Clear),
            "V" => Some(Self::View),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct Console<R, W, C> {
    input: InputReader<R, W>,
    session: ListSession,
    chooser: C,
    menu_choice: Pattern,
    list_name: Pattern,
}

impl<R: BufRead, W: Write, C: FileChooser> Console<R, W, C> {
    pub fn new(input: InputReader<R, W>, session: ListSession, chooser: C) -> ListResult<Self> {
        Ok(Self {
            input,
            session,
            chooser,
            menu_choice: Pattern::new(MENU_CHOICE_PATTERN)?,
            list_name: Pattern::new(LIST_NAME_PATTERN)?,
        })
    }

    pub fn session(&self) -> &ListSession {
        &self.session
    }

    pub fn into_parts(self) -> (InputReader<R, W>, ListSession) {
        (self.input, self.session)
    }

    /// Run the menu loop until the user confirms quitting.
    pub fn run(&mut self) -> ListResult<()> {
        write!(self.input.output(), "{}", render_header(BANNER))?;
        loop {
            self.show_menu()?;
            let choice = self
                .input
                .read_matching("Enter your menu choice", &self.menu_choice)?;
            let Some(command) = Command::from_choice(&choice) else {
                continue;
            };
            debug!(?command, lifecycle = ?self.session.lifecycle(), "menu command");
            if self.dispatch(command)? {
                return Ok(());
            }
        }
    }

    /// Execute one command. Returns `true` when the user confirmed quitting.
    pub fn dispatch(&mut self, command: Command) -> ListResult<bool> {
        match command {
            Command::Open => self.open()?,
            Command::Save => self.save()?,
            Command::Add => self.add()?,
            Command::Delete => self.delete()?,
            Command::Clear => self.clear()?,
            Command::View => self.show_list()?,
            Command::Quit => return self.quit(),
        }
        Ok(false)
    }

    /// Load `path` into the session, reporting failures on the console.
    pub fn open_path(&mut self, path: &Path) -> ListResult<()> {
        match self.session.load(path) {
            Ok(_) => self.show_list(),
            Err(err @ (ListError::NotFound { .. } | ListError::Io { .. })) => {
                writeln!(self.input.output(), "ERROR: {}", err)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn open(&mut self) -> ListResult<()> {
        self.offer_save()?;
        match self.chooser.choose_file(&mut self.input)? {
            Some(path) => self.open_path(&path),
            None => {
                writeln!(self.input.output(), "Open cancelled.")?;
                Ok(())
            }
        }
    }

    fn save(&mut self) -> ListResult<()> {
        if !self.session.is_dirty() {
            writeln!(self.input.output(), "No unsaved changes to save.")?;
            return Ok(());
        }
        self.save_list()
    }

    fn add(&mut self) -> ListResult<()> {
        let item = self.input.read_line("Enter the list item")?;
        self.session.add(item);
        self.show_list()
    }

    fn delete(&mut self) -> ListResult<()> {
        if self.session.is_empty() {
            writeln!(self.input.output(), "No items to delete")?;
            writeln!(self.input.output())?;
            return Ok(());
        }
        let len = i64::try_from(self.session.len()).unwrap_or(i64::MAX);
        let choice = self
            .input
            .read_int_in_range("Enter the index of the list item to delete", 1, len)?;
        let index = usize::try_from(choice).unwrap_or(0);
        self.session.delete_at(index)?;
        self.show_list()
    }

    fn clear(&mut self) -> ListResult<()> {
        if self
            .input
            .read_yes_no("Are you sure you want to clear all items?")?
        {
            self.session.clear();
        }
        Ok(())
    }

    fn quit(&mut self) -> ListResult<bool> {
        self.offer_save()?;
        self.input.read_yes_no("Are you sure you want to quit?")
    }

    /// Warn about unsaved edits and save if the user agrees.
    fn offer_save(&mut self) -> ListResult<()> {
        if !self.session.is_dirty() {
            return Ok(());
        }
        writeln!(
            self.input.output(),
            "Warning! Unsaved list items will be lost."
        )?;
        if self.input.read_yes_no("Would you like to save?")? {
            self.save_list()?;
        }
        Ok(())
    }

    fn save_list(&mut self) -> ListResult<()> {
        let Self {
            input,
            session,
            list_name,
            ..
        } = self;
        let saved = session.save(|rejected| {
            if let Some(name) = rejected {
                writeln!(
                    input.output(),
                    "A list named '{}' already exists. Enter another name.",
                    name
                )?;
            }
            input.read_matching("Enter the list name", list_name)
        });
        match saved {
            Ok(path) => {
                writeln!(
                    self.input.output(),
                    "Saved {} item(s) to {}",
                    self.session.len(),
                    path.display()
                )?;
                Ok(())
            }
            Err(err @ ListError::Io { .. }) => {
                writeln!(self.input.output(), "ERROR: {}", err)?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn show_menu(&mut self) -> ListResult<()> {
        let out = self.input.output();
        writeln!(out, "{}", MENU_HEADER)?;
        for line in MENU {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn show_list(&mut self) -> ListResult<()> {
        let title = self.session.name().unwrap_or(DEFAULT_LIST_TITLE).to_string();
        let out = self.input.output();
        writeln!(out)?;
        writeln!(out, "----- {} -----", title)?;
        for (idx, item) in self.session.items().iter().enumerate() {
            writeln!(out, " {:2}. {}", idx + 1, item)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
