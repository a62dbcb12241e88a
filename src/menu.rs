//! Interactive numbered-menu loop. Works against one loaded-once list and
//! persists after every mutating choice, same as the one-shot commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::actions;
use crate::persistence;
use crate::render;
use crate::task::Status;
use crate::tasklist::TaskList;

pub fn run(path: &Path, list: &mut TaskList) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    run_loop(&mut lines, &mut io::stdout(), path, list)
}

// The menu choice and the numeric id reads are whitespace-tolerant;
// descriptions, keywords, and filenames are taken verbatim.
fn run_loop(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    path: &Path,
    list: &mut TaskList,
) -> Result<()> {
    loop {
        print_menu(out)?;
        let Some(choice) = prompt(lines, out, "Choose an option (1-9): ")? else {
            break;
        };

        match choice.trim() {
            "1" => render::print_all(out, list)?,
            "2" => {
                let Some(description) = prompt(lines, out, "Task description: ")? else {
                    break;
                };
                list.add(&description);
                persistence::save(path, list)?;
                writeln!(out, "Task '{description}' added!")?;
            }
            "3" => {
                render::print_all(out, list)?;
                let Some(input) = prompt(lines, out, "Id of the task to mark as done: ")? else {
                    break;
                };
                match input.trim().parse::<u32>() {
                    Ok(id) => actions::mark_done(out, path, list, id)?,
                    Err(_) => writeln!(out, "Enter a valid number.")?,
                }
            }
            "4" => {
                render::print_all(out, list)?;
                let Some(input) = prompt(lines, out, "Number of the task to delete: ")? else {
                    break;
                };
                match input.trim().parse::<u32>() {
                    Ok(number) => actions::delete(out, path, list, number)?,
                    Err(_) => writeln!(out, "Enter a valid number.")?,
                }
            }
            "5" => {
                let Some(keyword) = prompt(lines, out, "Keyword to search for: ")? else {
                    break;
                };
                render::print_matches(out, list, &keyword)?;
            }
            "6" => {
                let Some(filename) = prompt(lines, out, "File to export to: ")? else {
                    break;
                };
                match persistence::export(Path::new(&filename), list) {
                    Ok(()) => writeln!(out, "Tasks exported to '{filename}'")?,
                    Err(err) => writeln!(out, "{err:#}")?,
                }
            }
            "7" => {
                let Some(filename) = prompt(lines, out, "File to import from: ")? else {
                    break;
                };
                actions::import(out, path, list, Path::new(&filename))?;
            }
            "8" => {
                writeln!(out, "Bye!")?;
                break;
            }
            "9" => {
                if !filter_menu(lines, out, list)? {
                    break;
                }
            }
            _ => writeln!(out, "Invalid option, try again.")?,
        }
    }

    Ok(())
}

/// Nested status-filter sub-menu. Returns false when stdin is exhausted.
fn filter_menu(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    list: &TaskList,
) -> Result<bool> {
    loop {
        writeln!(out)?;
        writeln!(out, "Filter tasks:")?;
        writeln!(out, "1. Only TODO tasks")?;
        writeln!(out, "2. Only DONE tasks")?;
        writeln!(out, "3. Back")?;
        let Some(choice) = prompt(lines, out, "Choose an option: ")? else {
            return Ok(false);
        };
        match choice.trim() {
            "1" => render::print_filtered(out, list, Status::Todo)?,
            "2" => render::print_filtered(out, list, Status::Done)?,
            "3" => return Ok(true),
            _ => writeln!(out, "Invalid choice.")?,
        }
    }
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Task Manager ===")?;
    writeln!(out, "1. List all tasks")?;
    writeln!(out, "2. Add a new task")?;
    writeln!(out, "3. Mark a task as done")?;
    writeln!(out, "4. Delete a task")?;
    writeln!(out, "5. Search tasks by keyword")?;
    writeln!(out, "6. Export tasks")?;
    writeln!(out, "7. Import tasks")?;
    writeln!(out, "8. Exit")?;
    writeln!(out, "9. List tasks by status")
}

/// Prints a prompt and reads one line verbatim; `None` means stdin closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
    msg: &str,
) -> Result<Option<String>> {
    write!(out, "{msg}")?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
