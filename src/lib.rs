pub mod actions;
pub mod menu;
pub mod persistence;
pub mod render;
pub mod task;
pub mod tasklist;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::task::Status;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(name = "taskman", version, about = "A small JSON-backed task manager")]
pub struct Cli {
    /// Optional override for the backing file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print all tasks, todo first
    List,
    /// Add a new todo task
    Add { description: String },
    /// Mark the task with this id as done
    Done { id: u32 },
    /// Delete the task with this number (1-based)
    Delete { id: u32 },
    /// Print tasks with the given status
    Filter {
        #[arg(value_enum)]
        status: Status,
    },
    /// Print tasks whose description contains the keyword
    Search { keyword: String },
    /// Write the current tasks to a file
    Export { filename: PathBuf },
    /// Merge tasks from a file, renumber, and persist
    Import { filename: PathBuf },
    /// Launch the interactive menu
    Menu,
}
