use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<W: Write, T: fmt::Display>(
    out: &mut W,
    color: &str,
    icon: &str,
    msg: T,
) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    tagged(out, FG_BLUE, ICON_INFO, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    tagged(out, FG_GREEN, ICON_OK, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    tagged(out, FG_YELLOW, ICON_WARN, msg)
}

pub fn error<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    tagged(out, FG_RED, ICON_ERR, msg)
}

/// Section header, e.g. ` -- Main Menu -- `
pub fn header<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{} -- {} -- {}", FG_BLUE, BOLD, msg, RESET)
}
