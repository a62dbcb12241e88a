//! Console rendering shared by the one-shot commands and the menu loop.
//! Every listing prints one `"{id}. {description} - [{status}]"` line per
//! task; empty results get a fixed message instead of an empty listing.
//! Output goes through a `Write` sink so the messages can be asserted.

use std::io::{self, Write};

use crate::task::Status;
use crate::tasklist::TaskList;

pub fn print_all(out: &mut impl Write, list: &TaskList) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "No tasks.");
    }
    for task in list.sorted_for_display() {
        writeln!(out, "{task}")?;
    }
    Ok(())
}

pub fn print_filtered(out: &mut impl Write, list: &TaskList, status: Status) -> io::Result<()> {
    let matches = list.filter(status);
    if matches.is_empty() {
        return writeln!(out, "No tasks with status '{status}'.");
    }
    for task in matches {
        writeln!(out, "{task}")?;
    }
    Ok(())
}

pub fn print_matches(out: &mut impl Write, list: &TaskList, keyword: &str) -> io::Result<()> {
    let matches = list.search(keyword);
    if matches.is_empty() {
        return writeln!(out, "No tasks containing '{keyword}'.");
    }
    writeln!(out, "Tasks containing '{keyword}':")?;
    for task in matches {
        writeln!(out, "{task}")?;
    }
    Ok(())
}
