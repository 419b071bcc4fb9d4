//! The interactive menus of a session, each declared with the tokens it accepts.

use crate::ui::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    View,
    New,
    Search,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Date,
    TimeSpent,
    Exact,
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateChoice {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryChoice {
    TryAgain,
    Quit,
}

pub const MAIN_MENU: Menu<MainCommand> = Menu {
    prompt: "(V)iew, (N)ew, (S)earch, (Q)uit ",
    choices: &[
        ("v", MainCommand::View),
        ("n", MainCommand::New),
        ("s", MainCommand::Search),
        ("q", MainCommand::Quit),
    ],
};

pub const SEARCH_MENU: Menu<SearchMode> = Menu {
    prompt: "Search by (D)ate, (T)ime spent, (E)xact, (P)attern ",
    choices: &[
        ("d", SearchMode::Date),
        ("t", SearchMode::TimeSpent),
        ("e", SearchMode::Exact),
        ("p", SearchMode::Pattern),
    ],
};

pub const CREATE_MENU: Menu<CreateChoice> = Menu {
    prompt: "Make new? (Y) or (N) ",
    choices: &[("y", CreateChoice::Yes), ("n", CreateChoice::No)],
};

pub const RETRY_MENU: Menu<RetryChoice> = Menu {
    prompt: "Invalid path (T)ry again or (Q)uit ",
    choices: &[("t", RetryChoice::TryAgain), ("q", RetryChoice::Quit)],
};
