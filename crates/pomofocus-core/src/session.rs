//! A single user's session: one timer, one task list, one action entry point.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::events::Event;
use crate::task::{Task, TaskStore};
use crate::timer::{Snapshot, TimerEngine, TimerMode};

/// Everything a user can ask the session to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "arg", rename_all = "snake_case")]
pub enum Action {
    SwitchMode(TimerMode),
    ToggleRunning,
    Reset,
    AddTask(String),
    ToggleTask(u64),
    DeleteTask(u64),
}

impl Action {
    /// Whether applying this action can change the task list.
    pub fn touches_tasks(&self) -> bool {
        matches!(
            self,
            Action::AddTask(_) | Action::ToggleTask(_) | Action::DeleteTask(_)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    timer: TimerEngine,
    tasks: TaskStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(timer: TimerEngine, tasks: TaskStore) -> Self {
        Self { timer, tasks }
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut TimerEngine {
        &mut self.timer
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.list()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.timer.snapshot()
    }

    /// Apply one user action to completion.
    ///
    /// Returns `None` when the action had no effect (blank task text,
    /// unknown task id).
    pub fn handle_action(&mut self, action: Action) -> Option<Event> {
        debug!(?action, "handling action");
        match action {
            Action::SwitchMode(mode) => Some(self.timer.switch_mode(mode)),
            Action::ToggleRunning => Some(self.timer.toggle_running()),
            Action::Reset => Some(self.timer.reset()),
            Action::AddTask(text) => self.tasks.add(&text).map(|task| Event::TaskAdded {
                task,
                at: Utc::now(),
            }),
            Action::ToggleTask(id) => self.tasks.toggle(id).map(|completed| Event::TaskToggled {
                id,
                completed,
                at: Utc::now(),
            }),
            Action::DeleteTask(id) => self.tasks.delete(id).then(|| Event::TaskDeleted {
                id,
                at: Utc::now(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_actions_reach_the_engine() {
        let mut session = Session::new();
        session.handle_action(Action::ToggleRunning);
        assert!(session.timer().is_running());

        session.handle_action(Action::SwitchMode(TimerMode::ShortBreak));
        assert_eq!(session.timer().mode(), TimerMode::ShortBreak);
        assert!(!session.timer().is_running());
    }

    #[test]
    fn task_actions_reach_the_store() {
        let mut session = Session::new();
        let event = session.handle_action(Action::AddTask("buy milk".into()));
        let id = match event {
            Some(Event::TaskAdded { task, .. }) => task.id,
            other => panic!("expected TaskAdded, got {other:?}"),
        };

        assert!(matches!(
            session.handle_action(Action::ToggleTask(id)),
            Some(Event::TaskToggled { completed: true, .. })
        ));
        assert!(session.handle_action(Action::DeleteTask(id)).is_some());
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn no_op_actions_yield_no_event() {
        let mut session = Session::new();
        assert!(session.handle_action(Action::AddTask("  ".into())).is_none());
        assert!(session.handle_action(Action::ToggleTask(7)).is_none());
        assert!(session.handle_action(Action::DeleteTask(7)).is_none());
    }

    #[test]
    fn touches_tasks_only_for_task_actions() {
        assert!(Action::AddTask("x".into()).touches_tasks());
        assert!(!Action::Reset.touches_tasks());
        assert!(!Action::SwitchMode(TimerMode::Work).touches_tasks());
    }
}
