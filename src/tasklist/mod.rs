use serde::{Deserialize, Serialize};

use crate::task::{Status, Task};

/// The in-memory task list. Serializes as a bare JSON array so the backing
/// file stays a plain list of task objects.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Appends a new todo task and returns its id.
    pub fn add(&mut self, description: &str) -> u32 {
        let id = self.tasks.len() as u32 + 1;
        self.tasks.push(Task::new(id, description));
        id
    }

    /// Removes the task at a zero-based position and renumbers the rest.
    /// Out of range is a no-op.
    pub fn delete_index(&mut self, idx: usize) -> Option<Task> {
        if idx >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(idx);
        self.renumber();
        Some(removed)
    }

    /// Flips the first task whose id matches to done. Lookup is by the id
    /// *value*, not by position.
    pub fn mark_done(&mut self, id: u32) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.status = Status::Done;
        Some(task)
    }

    pub fn filter(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Case-insensitive substring match on the description.
    pub fn search(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.description.to_lowercase().contains(&needle))
            .collect()
    }

    /// Display order: todo tasks first, then done, each by ascending id.
    /// Stored order is untouched.
    pub fn sorted_for_display(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|t| (t.is_done(), t.id));
        view
    }

    /// Appends imported tasks and renumbers the combined list end-to-end.
    pub fn merge(&mut self, imported: Vec<Task>) {
        self.tasks.extend(imported);
        self.renumber();
    }

    // Ids are always the contiguous range 1..=N, assigned by position.
    fn renumber(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.id = i as u32 + 1;
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
