//! The interactive work-log session: load, menu loop, save.

use crate::cli::menus::{
    CREATE_MENU, CreateChoice, MAIN_MENU, MainCommand, RETRY_MENU, RetryChoice, SEARCH_MENU,
    SearchMode,
};
use crate::core::search::{self, Query};
use crate::errors::{AppError, AppResult};
use crate::models::{LogEntry, LogStore};
use crate::storage::{ActivityLog, csv_store};
use crate::ui::Console;
use crate::ui::display::{entry_line, indexed_line};
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::date::{format_date, today};
use crate::utils::expand_tilde;
use regex::Regex;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// How a session ended. The process exits normally in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The store was saved on quit.
    Quit,
    /// No log file could be opened and the user chose not to create one.
    Declined,
    /// Saving failed; the in-memory changes are lost.
    SaveFailed,
}

pub struct Session<R, W> {
    path: PathBuf,
    store: LogStore,
    console: Console<R, W>,
    activity: Option<ActivityLog>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(path: impl Into<PathBuf>, console: Console<R, W>) -> Self {
        Self {
            path: path.into(),
            store: LogStore::new(),
            console,
            activity: None,
        }
    }

    pub fn with_activity_log(mut self, log: ActivityLog) -> Self {
        self.activity = Some(log);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Open the store, serve the main menu until Quit, then save.
    ///
    /// End of input counts as Quit.
    pub fn run(&mut self) -> AppResult<Termination> {
        match self.open_store() {
            Ok(true) => {}
            Ok(false) | Err(AppError::InputClosed) => {
                info(self.console.out(), "Quitting")?;
                return Ok(Termination::Declined);
            }
            Err(e) => return Err(e),
        }

        match self.main_menu() {
            Ok(()) | Err(AppError::InputClosed) => self.quit(),
            Err(e) => Err(e),
        }
    }

    /// Load the store, offering to create a new log file while it is missing.
    ///
    /// Returns `false` when the user gives up.
    pub fn open_store(&mut self) -> AppResult<bool> {
        loop {
            match csv_store::load(&self.path) {
                Ok(store) => {
                    for rejected in store.rejected() {
                        warning(
                            self.console.out(),
                            format!(
                                "Log file error at line {}: {} (record kept as is)",
                                rejected.line, rejected.reason
                            ),
                        )?;
                    }
                    self.store = store;
                    let msg = format!("{} entries loaded", self.store.len());
                    self.record("load", &msg)?;
                    return Ok(true);
                }
                Err(e @ AppError::StorageMissing(_)) => {
                    error(self.console.out(), format!("Critical error: {}", e))?;
                    if self.console.choose(&CREATE_MENU)? == CreateChoice::No {
                        return Ok(false);
                    }
                    match self.create_new_log()? {
                        Some(path) => {
                            self.path = path;
                            self.record("create", "New log file created")?;
                        }
                        None => return Ok(false),
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn create_new_log(&mut self) -> AppResult<Option<PathBuf>> {
        loop {
            let answer = self
                .console
                .read_line("Enter path & filename to new log file: ")?;
            let path = expand_tilde(&answer);

            match csv_store::create_empty(&path) {
                Ok(()) => {
                    success(self.console.out(), format!("Log file: {}", path.display()))?;
                    return Ok(Some(path));
                }
                Err(e @ AppError::StorageUnwritable { .. }) => {
                    error(self.console.out(), e)?;
                    if self.console.choose(&RETRY_MENU)? == RetryChoice::Quit {
                        return Ok(None);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn main_menu(&mut self) -> AppResult<()> {
        loop {
            header(self.console.out(), "Main Menu")?;
            match self.console.choose(&MAIN_MENU)? {
                MainCommand::View => self.view()?,
                MainCommand::New => self.new_entry()?,
                MainCommand::Search => self.search()?,
                MainCommand::Quit => return Ok(()),
            }
        }
    }

    /// Every entry, prefixed with its position.
    pub fn view(&mut self) -> AppResult<()> {
        if self.store.is_empty() {
            info(self.console.out(), "No entries")?;
            return Ok(());
        }
        for (i, entry) in self.store.iter().enumerate() {
            self.console.say(indexed_line(i, entry))?;
        }
        Ok(())
    }

    /// Ask for a new entry dated today and append it to the store.
    pub fn new_entry(&mut self) -> AppResult<()> {
        let task_name = self.console.read_line("Please enter a task name: ")?;
        let time_spent = self.console.read_minutes("Please enter time spent: ")?;
        let notes = self.console.read_line("Please enter your notes: ")?;

        let entry = LogEntry::new(today(), task_name, time_spent, notes);

        success(self.console.out(), "Added:")?;
        self.console.say(entry_line(&entry))?;

        let msg = format!("{} ({} min)", entry.task_name, entry.time_spent);
        self.store.push(entry);
        self.record("new", &msg)
    }

    pub fn search(&mut self) -> AppResult<()> {
        let mode = self.console.choose(&SEARCH_MENU)?;

        let Some(query) = self.read_query(mode)? else {
            info(self.console.out(), "No results")?;
            return Ok(());
        };

        let results = search::search(self.store.entries(), &query);
        if results.is_empty() {
            info(self.console.out(), "No results")?;
        } else {
            for entry in results {
                self.console.say(entry_line(entry))?;
            }
        }
        Ok(())
    }

    /// `None` when there is nothing to choose from (no dates yet).
    fn read_query(&mut self, mode: SearchMode) -> AppResult<Option<Query>> {
        let query = match mode {
            SearchMode::Date => {
                let dates = self.store.dates();
                if dates.is_empty() {
                    return Ok(None);
                }
                for (i, d) in dates.iter().enumerate() {
                    self.console.say(format!("{} {}", i, format_date(d)))?;
                }
                let idx = self
                    .console
                    .choose_index("Enter the number of date: ", dates.len())?;
                Query::Date(dates[idx])
            }
            SearchMode::TimeSpent => {
                Query::TimeSpent(self.console.read_minutes("Enter time spent (mins): ")?)
            }
            SearchMode::Exact => Query::Exact(self.console.read_line("Enter search string: ")?),
            SearchMode::Pattern => loop {
                let pattern = self.console.read_line("Enter search pattern: ")?;
                match Regex::new(&pattern) {
                    Ok(re) => break Query::Pattern(re),
                    Err(e) => warning(self.console.out(), AppError::from(e))?,
                }
            },
        };
        Ok(Some(query))
    }

    /// Save the store. A save failure is reported and ends the session too.
    pub fn quit(&mut self) -> AppResult<Termination> {
        match csv_store::save(&self.path, &self.store) {
            Ok(()) => {
                success(self.console.out(), "Saved")?;
                let msg = format!("{} entries saved", self.store.len());
                self.record("save", &msg)?;
                Ok(Termination::Quit)
            }
            Err(e @ AppError::StorageUnwritable { .. }) => {
                error(self.console.out(), format!("Unable to save. {}", e))?;
                error(self.console.out(), "Please contact support. Quitting.")?;
                Ok(Termination::SaveFailed)
            }
            Err(e) => Err(e),
        }
    }

    /// Internal activity log; a failure here never stops the session.
    fn record(&mut self, operation: &str, message: &str) -> AppResult<()> {
        if let Some(log) = &self.activity
            && let Err(e) = log.ttlog(operation, &self.path.to_string_lossy(), message)
        {
            warning(
                self.console.out(),
                format!("Failed to write internal log: {}", e),
            )?;
        }
        Ok(())
    }
}
