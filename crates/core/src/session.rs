//! Per-identity session state and the optimistic-mutation contract.
//!
//! The session owns the local task collection between snapshots. Toggle
//! mutations negate the current value and patch the collection before
//! the remote call goes out; deletes wait for the store to confirm; an
//! authoritative snapshot always overwrites whatever the optimistic
//! patches left behind.

use thiserror::Error;

use crate::model::{Identity, NewTask, Task, TaskPatch};
use crate::notify::Severity;
use crate::view::{derive_page, TaskPage, ViewQuery};

/// Validation failure on the create form. The message is the one shown
/// to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Please fill in both title and description.")]
pub struct ComposeError;

/// A remote mutation the caller still has to issue, described richly
/// enough to map its outcome back to a user-facing notice.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create { task: NewTask },
    ToggleCompleted { task_id: String, value: bool },
    ToggleFavourite { task_id: String, value: bool },
    Delete { task_id: String },
}

impl Mutation {
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "create",
            Mutation::ToggleCompleted { .. } => "toggle complete",
            Mutation::ToggleFavourite { .. } => "toggle favourite",
            Mutation::Delete { .. } => "delete",
        }
    }

    /// The patch a toggle mutation carries to the store, if any.
    pub fn patch(&self) -> Option<TaskPatch> {
        match self {
            Mutation::ToggleCompleted { value, .. } => Some(TaskPatch::completed(*value)),
            Mutation::ToggleFavourite { value, .. } => Some(TaskPatch::favourite(*value)),
            Mutation::Create { .. } | Mutation::Delete { .. } => None,
        }
    }

    /// Notice to enqueue when the remote call resolves. Create notifies
    /// at submit time and toggles stay silent on success, so only
    /// delete has a success notice here; every failure has one.
    pub fn outcome_notice(&self, result: &Result<(), String>) -> Option<(String, Severity)> {
        match result {
            Ok(()) => match self {
                Mutation::Delete { .. } => {
                    Some(("Task deleted successfully".into(), Severity::Success))
                }
                _ => None,
            },
            Err(_) => {
                let message = match self {
                    Mutation::Create { .. } => "Failed to add task.",
                    Mutation::Delete { .. } => "Failed to delete task.",
                    Mutation::ToggleCompleted { .. } | Mutation::ToggleFavourite { .. } => {
                        "Failed to update task."
                    }
                };
                Some((message.into(), Severity::Error))
            }
        }
    }
}

/// Owner-scoped local state: the last authoritative snapshot with any
/// optimistic patches applied on top, plus the live view query.
#[derive(Debug, Clone)]
pub struct Session {
    identity: Identity,
    tasks: Vec<Task>,
    query: ViewQuery,
    loaded: bool,
}

impl Session {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            tasks: Vec::new(),
            query: ViewQuery::new(),
            loaded: false,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Whether the first snapshot for this identity has arrived.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Authoritative overwrite; stale optimistic patches do not
    /// survive this.
    pub fn apply_snapshot(&mut self, tasks: Vec<Task>) {
        tracing::debug!(owner = %self.identity.uid, count = tasks.len(), "snapshot applied");
        self.tasks = tasks;
        self.loaded = true;
    }

    pub fn set_search(&mut self, search: String) {
        // Deliberately leaves the page alone; an out-of-range page
        // renders as empty rather than erroring.
        self.query.search = search;
    }

    pub fn set_filter(&mut self, filter: crate::model::FilterMode) {
        self.query.filter = filter;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    /// Derive the slice the dashboard should render right now.
    pub fn page(&self) -> TaskPage {
        derive_page(&self.tasks, &self.query)
    }

    /// Validate the create form. The store call is only issued for an
    /// `Ok`; an `Err` means one error notice and nothing else.
    pub fn compose(&self, title: &str, description: &str) -> Result<NewTask, ComposeError> {
        if title.is_empty() || description.is_empty() {
            return Err(ComposeError);
        }
        Ok(NewTask {
            title: title.to_string(),
            description: description.to_string(),
            owner_uid: self.identity.uid.clone(),
        })
    }

    /// Flip `completed` locally and hand back the mutation to issue.
    /// The new value is the negation of the value current at call time.
    pub fn toggle_completed(&mut self, task_id: &str) -> Option<Mutation> {
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;
        let value = !task.completed;
        task.completed = value;
        Some(Mutation::ToggleCompleted {
            task_id: task_id.to_string(),
            value,
        })
    }

    /// Flip `favourite` locally; independent of `completed`.
    pub fn toggle_favourite(&mut self, task_id: &str) -> Option<Mutation> {
        let task = self.tasks.iter_mut().find(|task| task.id == task_id)?;
        let value = !task.favourite;
        task.favourite = value;
        Some(Mutation::ToggleFavourite {
            task_id: task_id.to_string(),
            value,
        })
    }

    /// Deletes are not applied optimistically; the row stays visible
    /// until the next snapshot confirms the removal.
    pub fn delete(&self, task_id: &str) -> Mutation {
        Mutation::Delete {
            task_id: task_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterMode;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn session_with(titles: &[&str]) -> Session {
        let identity = Identity {
            uid: "u1".into(),
            display_name: "Alex".into(),
        };
        let mut session = Session::new(identity);
        let tasks = titles
            .iter()
            .enumerate()
            .map(|(index, title)| Task {
                id: format!("t{index}"),
                title: title.to_string(),
                description: "details".into(),
                completed: false,
                favourite: false,
                owner_uid: "u1".into(),
                created_at: Utc::now(),
            })
            .collect();
        session.apply_snapshot(tasks);
        session
    }

    #[test]
    fn toggle_negates_locally_before_the_remote_call() {
        let mut session = session_with(&["Buy milk"]);
        assert!(!session.tasks()[0].completed);

        let mutation = session.toggle_completed("t0").expect("known task");
        // Local state reflects the change immediately.
        assert!(session.tasks()[0].completed);
        // The remote call carries the same negated value.
        assert_eq!(
            mutation,
            Mutation::ToggleCompleted {
                task_id: "t0".into(),
                value: true,
            }
        );
        assert_eq!(mutation.patch(), Some(TaskPatch::completed(true)));
    }

    #[test]
    fn toggles_are_independent_of_each_other() {
        let mut session = session_with(&["Buy milk"]);
        session.toggle_favourite("t0").unwrap();
        assert!(session.tasks()[0].favourite);
        assert!(!session.tasks()[0].completed);

        session.toggle_completed("t0").unwrap();
        assert!(session.tasks()[0].favourite);
        assert!(session.tasks()[0].completed);
    }

    #[test]
    fn toggle_on_unknown_task_is_a_no_op() {
        let mut session = session_with(&["Buy milk"]);
        assert_eq!(session.toggle_completed("missing"), None);
    }

    #[test]
    fn snapshot_overwrites_optimistic_state() {
        let mut session = session_with(&["Buy milk"]);
        session.toggle_completed("t0").unwrap();
        assert!(session.tasks()[0].completed);

        // The store never accepted the write; the authoritative
        // snapshot wins over the optimistic patch.
        let authoritative = vec![Task {
            id: "t0".into(),
            title: "Buy milk".into(),
            description: "details".into(),
            completed: false,
            favourite: false,
            owner_uid: "u1".into(),
            created_at: Utc::now(),
        }];
        session.apply_snapshot(authoritative);
        assert!(!session.tasks()[0].completed);
    }

    #[test]
    fn compose_requires_both_fields() {
        let session = session_with(&[]);
        assert_eq!(session.compose("", "Buy eggs"), Err(ComposeError));
        assert_eq!(session.compose("Buy eggs", ""), Err(ComposeError));

        let new_task = session.compose("Buy eggs", "A dozen").unwrap();
        assert_eq!(new_task.owner_uid, "u1");
        assert_eq!(new_task.title, "Buy eggs");
    }

    #[test]
    fn delete_does_not_touch_local_state() {
        let session = session_with(&["Buy milk"]);
        let mutation = session.delete("t0");
        assert_eq!(session.tasks().len(), 1);
        assert_eq!(
            mutation,
            Mutation::Delete {
                task_id: "t0".into()
            }
        );
    }

    #[test]
    fn outcome_notices_follow_the_reference_behavior() {
        let delete = Mutation::Delete {
            task_id: "t0".into(),
        };
        assert_eq!(
            delete.outcome_notice(&Ok(())),
            Some(("Task deleted successfully".into(), Severity::Success))
        );
        assert_eq!(
            delete.outcome_notice(&Err("offline".into())),
            Some(("Failed to delete task.".into(), Severity::Error))
        );

        let toggle = Mutation::ToggleCompleted {
            task_id: "t0".into(),
            value: true,
        };
        assert_eq!(toggle.outcome_notice(&Ok(())), None);
        assert_eq!(
            toggle.outcome_notice(&Err("offline".into())),
            Some(("Failed to update task.".into(), Severity::Error))
        );
    }

    #[test]
    fn page_reflects_the_live_query() {
        let mut session = session_with(&["Buy milk", "Pay rent", "Walk dog"]);
        session.set_search("dog".into());
        session.set_filter(FilterMode::All);
        let page = session.page();
        assert_eq!(page.tasks.len(), 1);
        assert_eq!(page.tasks[0].title, "Walk dog");

        // Narrowing the set with the page unchanged degrades gracefully.
        session.set_page(3);
        assert!(session.page().is_empty());
    }
}
