use chrono::{DateTime, Local};
use thiserror::Error;

/// Validation failure for the add/update operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Please enter a task name.")]
    EmptyName,
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Local>,
}

impl Task {
    fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Local::now(),
        }
    }
}

/// In-memory task collection, insertion order.
///
/// Owns id generation: ids come from a monotonic counter, so every id is
/// unique no matter how quickly tasks are created.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64, // last issued id
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task and return its id.
    pub fn add(&mut self, name: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.tasks.push(Task::new(id, name));
        id
    }

    /// Replace the name of the task with the given id, in place.
    /// Returns false if no task matches; order is never disturbed.
    pub fn rename(&mut self, id: u64, name: String) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.name = name;
                true
            }
            None => false,
        }
    }

    /// Remove the task with the given id, keeping the relative order of
    /// the rest. Returns false if no task matches.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Task at a list position (display order).
    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_with_fresh_ids() {
        let mut list = TaskList::new();
        let a = list.add("Buy milk".to_string());
        let b = list.add("Walk dog".to_string());

        assert_eq!(list.len(), 2);
        assert_ne!(a, b);
        assert_eq!(list.task_at(0).unwrap().name, "Buy milk");
        assert_eq!(list.task_at(1).unwrap().name, "Walk dog");
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut list = TaskList::new();
        let a = list.add("one".to_string());
        list.remove(a);
        let b = list.add("two".to_string());

        assert_ne!(a, b);
    }

    #[test]
    fn test_rename_preserves_order() {
        let mut list = TaskList::new();
        let a = list.add("first".to_string());
        let b = list.add("second".to_string());
        let c = list.add("third".to_string());

        assert!(list.rename(b, "renamed".to_string()));

        let names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "renamed", "third"]);
        assert_eq!(list.get(a).unwrap().name, "first");
        assert_eq!(list.get(c).unwrap().name, "third");
    }

    #[test]
    fn test_rename_missing_id_is_noop() {
        let mut list = TaskList::new();
        list.add("only".to_string());

        assert!(!list.rename(999, "ghost".to_string()));
        assert_eq!(list.task_at(0).unwrap().name, "only");
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list = TaskList::new();
        let _a = list.add("first".to_string());
        let b = list.add("second".to_string());
        let _c = list.add("third".to_string());

        assert!(list.remove(b));

        let names: Vec<&str> = list.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = TaskList::new();
        list.add("only".to_string());

        assert!(!list.remove(999));
        assert_eq!(list.len(), 1);
    }
}
