use std::io;

use anyhow::Result;
use clap::Parser;

use taskman::{actions, menu, persistence, render, Cli, Cmd};

fn main() -> Result<()> {
    // Diagnostics go to stderr at warn level; user-facing output stays on
    // stdout.
    let _logger = flexi_logger::Logger::try_with_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let cli = Cli::parse();
    let data_path = match cli.data_file {
        Some(path) => path,
        None => persistence::default_path()?,
    };
    let mut list = persistence::load(&data_path);
    let mut out = io::stdout();

    match cli.cmd {
        Some(Cmd::List) => render::print_all(&mut out, &list)?,
        Some(Cmd::Add { description }) => {
            list.add(&description);
            persistence::save(&data_path, &list)?;
            println!("Task '{description}' added!");
        }
        Some(Cmd::Done { id }) => actions::mark_done(&mut out, &data_path, &mut list, id)?,
        Some(Cmd::Delete { id }) => actions::delete(&mut out, &data_path, &mut list, id)?,
        Some(Cmd::Filter { status }) => render::print_filtered(&mut out, &list, status)?,
        Some(Cmd::Search { keyword }) => render::print_matches(&mut out, &list, &keyword)?,
        Some(Cmd::Export { filename }) => {
            persistence::export(&filename, &list)?;
            println!("Tasks exported to '{}'", filename.display());
        }
        Some(Cmd::Import { filename }) => {
            actions::import(&mut out, &data_path, &mut list, &filename)?
        }
        Some(Cmd::Menu) | None => menu::run(&data_path, &mut list)?,
    }

    Ok(())
}
