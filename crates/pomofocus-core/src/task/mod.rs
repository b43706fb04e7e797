//! In-memory to-do list that lives alongside the timer for one session.

use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

const STARTER_TASKS: [&str; 2] = ["Complete project documentation", "Review pull requests"];

/// Ordered task list with session-unique ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a couple of example tasks.
    pub fn with_starter_tasks() -> Self {
        let mut store = Self::new();
        for text in STARTER_TASKS {
            store.add(text);
        }
        store
    }

    /// Append a task. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Flip completion. Returns the new flag, or `None` for an unknown id.
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_delete() {
        let mut store = TaskStore::new();
        let task = store.add("buy milk").unwrap();
        assert_eq!(store.list(), &[task.clone()]);
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);

        assert!(store.delete(task.id));
        assert!(store.list().is_empty());
    }

    #[test]
    fn blank_text_is_rejected_silently() {
        let mut store = TaskStore::new();
        assert!(store.add("").is_none());
        assert!(store.add("   ").is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn ids_stay_unique_after_delete() {
        let mut store = TaskStore::new();
        let a = store.add("a").unwrap();
        store.delete(a.id);
        let b = store.add("b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn toggle_flips_and_ignores_unknown() {
        let mut store = TaskStore::new();
        let task = store.add("write report").unwrap();
        assert_eq!(store.toggle(task.id), Some(true));
        assert_eq!(store.toggle(task.id), Some(false));
        assert_eq!(store.toggle(999), None);
        assert!(!store.delete(999));
    }

    #[test]
    fn starter_tasks_keep_order() {
        let store = TaskStore::with_starter_tasks();
        let texts: Vec<_> = store.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, STARTER_TASKS);
    }
}
