//! Store mutations shared by the one-shot commands and the menu loop.
//! Each action applies the change, persists on success, and reports the
//! outcome as one console line.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::persistence;
use crate::tasklist::TaskList;

pub fn mark_done(out: &mut impl Write, path: &Path, list: &mut TaskList, id: u32) -> Result<()> {
    let done = list.mark_done(id).map(|t| t.description.clone());
    match done {
        Some(description) => {
            persistence::save(path, list)?;
            writeln!(out, "Task '{description}' marked as done!")?;
        }
        None => writeln!(out, "No task with id {id}.")?,
    }
    Ok(())
}

/// `number` is the 1-based position shown in listings.
pub fn delete(out: &mut impl Write, path: &Path, list: &mut TaskList, number: u32) -> Result<()> {
    let removed = number
        .checked_sub(1)
        .and_then(|idx| list.delete_index(idx as usize));
    match removed {
        Some(task) => {
            persistence::save(path, list)?;
            writeln!(out, "Task '{}' deleted!", task.description)?;
        }
        None => writeln!(out, "Invalid task number.")?,
    }
    Ok(())
}

pub fn import(out: &mut impl Write, path: &Path, list: &mut TaskList, filename: &Path) -> Result<()> {
    match persistence::import(filename) {
        Ok(imported) => {
            list.merge(imported);
            persistence::save(path, list)?;
            writeln!(out, "Tasks imported from '{}'", filename.display())?;
        }
        Err(err) => writeln!(out, "{err}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;
    use tempfile::TempDir;

    fn sample() -> TaskList {
        let mut list = TaskList::default();
        list.add("Zadatak 1");
        list.add("Zadatak 2");
        list
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn mark_done_reports_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut list = sample();
        let mut out = Vec::new();
        mark_done(&mut out, &path, &mut list, 1).unwrap();
        assert_eq!(text(out), "Task 'Zadatak 1' marked as done!\n");
        assert_eq!(list.tasks[0].status, Status::Done);
        assert_eq!(persistence::load(&path), list);
    }

    #[test]
    fn mark_done_unknown_id_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut list = sample();
        let mut out = Vec::new();
        mark_done(&mut out, &path, &mut list, 99).unwrap();
        assert_eq!(text(out), "No task with id 99.\n");
        assert_eq!(list, sample());
        // nothing was persisted
        assert!(!path.exists());
    }

    #[test]
    fn delete_reports_the_removed_task() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut list = sample();
        let mut out = Vec::new();
        delete(&mut out, &path, &mut list, 1).unwrap();
        assert_eq!(text(out), "Task 'Zadatak 1' deleted!\n");
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks[0].id, 1);
        assert_eq!(persistence::load(&path), list);
    }

    #[test]
    fn delete_out_of_range_reports_invalid_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut list = sample();

        let mut out = Vec::new();
        delete(&mut out, &path, &mut list, 99).unwrap();
        assert_eq!(text(out), "Invalid task number.\n");

        // 0 is below the 1-based range, not an underflow
        let mut out = Vec::new();
        delete(&mut out, &path, &mut list, 0).unwrap();
        assert_eq!(text(out), "Invalid task number.\n");

        assert_eq!(list, sample());
        assert!(!path.exists());
    }

    #[test]
    fn import_missing_file_reports_and_adds_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let missing = dir.path().join("nope.json");
        let mut list = sample();
        let mut out = Vec::new();
        import(&mut out, &path, &mut list, &missing).unwrap();
        assert_eq!(
            text(out),
            format!("File '{}' does not exist.\n", missing.display())
        );
        assert_eq!(list, sample());
        assert!(!path.exists());
    }

    #[test]
    fn import_merges_and_renumbers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let source = dir.path().join("in.json");
        let mut incoming = TaskList::default();
        incoming.add("uvezen");
        persistence::save(&source, &incoming).unwrap();

        let mut list = sample();
        let mut out = Vec::new();
        import(&mut out, &path, &mut list, &source).unwrap();
        assert_eq!(
            text(out),
            format!("Tasks imported from '{}'\n", source.display())
        );
        let ids: Vec<u32> = list.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(persistence::load(&path), list);
    }
}
