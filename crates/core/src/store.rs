//! The task-store boundary and the in-process reference store.
//!
//! The remote store is an external collaborator; this module pins down
//! the operations the client consumes — create, partial update, delete,
//! and a per-owner live subscription that re-delivers the full ordered
//! collection after every change. `MemoryStore` implements the same
//! contract in process for development and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use ulid::Ulid;

use crate::model::{NewTask, Task, TaskPatch};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task store rejected {op}: {reason}")]
    Rejected { op: &'static str, reason: String },
    #[error("no task with id {0}")]
    UnknownTask(String),
}

/// Remote task collection scoped to one signed-in identity.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a task; the store assigns the id and the creation
    /// timestamp that drives descending display order.
    async fn create_task(&self, new_task: NewTask) -> Result<(), StoreError>;

    /// Partial update of the toggle fields.
    async fn update_task(&self, task_id: &str, patch: TaskPatch) -> Result<(), StoreError>;

    async fn delete_task(&self, task_id: &str) -> Result<(), StoreError>;

    /// Live subscription for one owner. The feed carries a snapshot
    /// immediately (empty list included) and a fresh full snapshot
    /// after every change. Dropping the feed cancels delivery.
    fn subscribe(&self, owner_uid: &str) -> TaskFeed;
}

/// Snapshot stream bound to one owner. Cancellation is scoped to the
/// value: dropping the feed is the unsubscribe.
#[derive(Debug, Clone)]
pub struct TaskFeed {
    owner_uid: String,
    rx: watch::Receiver<Vec<Task>>,
}

impl TaskFeed {
    pub fn owner_uid(&self) -> &str {
        &self.owner_uid
    }

    /// The latest snapshot, available promptly after subscribing.
    pub fn snapshot(&self) -> Vec<Task> {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot. Resolves `None` once the store side
    /// has gone away.
    pub async fn next(&mut self) -> Option<Vec<Task>> {
        match self.rx.changed().await {
            Ok(()) => Some(self.rx.borrow_and_update().clone()),
            Err(_) => None,
        }
    }
}

/// Write counters surfaced for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub creates: u64,
    pub updates: u64,
    pub deletes: u64,
}

#[derive(Default)]
struct MemoryState {
    tasks: Vec<Task>,
    channels: HashMap<String, watch::Sender<Vec<Task>>>,
    offline: bool,
    ops: OpCounts,
}

/// In-process [`TaskStore`] with the same push semantics as the remote
/// collaborator. `set_offline` makes every write fail so error paths
/// can be exercised without a network.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    pub fn ops(&self) -> OpCounts {
        self.state.lock().ops
    }

    fn check_online(state: &MemoryState, op: &'static str) -> Result<(), StoreError> {
        if state.offline {
            return Err(StoreError::Rejected {
                op,
                reason: "task store offline".into(),
            });
        }
        Ok(())
    }

    fn snapshot_for(state: &MemoryState, owner_uid: &str) -> Vec<Task> {
        let mut tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|task| task.owner_uid == owner_uid)
            .cloned()
            .collect();
        // Descending creation order, ids as a tie break so equal
        // timestamps still sort newest-first.
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        tasks
    }

    fn broadcast(state: &mut MemoryState, owner_uid: &str) {
        let snapshot = Self::snapshot_for(state, owner_uid);
        if let Some(tx) = state.channels.get(owner_uid) {
            tx.send_replace(snapshot);
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create_task(&self, new_task: NewTask) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        Self::check_online(&state, "create")?;

        let task = Task {
            id: Ulid::new().to_string(),
            title: new_task.title,
            description: new_task.description,
            completed: false,
            favourite: false,
            owner_uid: new_task.owner_uid,
            created_at: Utc::now(),
        };
        let owner = task.owner_uid.clone();
        tracing::debug!(task_id = %task.id, owner = %owner, "task created");
        state.tasks.push(task);
        state.ops.creates += 1;
        Self::broadcast(&mut state, &owner);
        Ok(())
    }

    async fn update_task(&self, task_id: &str, patch: TaskPatch) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        Self::check_online(&state, "update")?;

        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| StoreError::UnknownTask(task_id.to_string()))?;
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(favourite) = patch.favourite {
            task.favourite = favourite;
        }
        let owner = task.owner_uid.clone();
        state.ops.updates += 1;
        Self::broadcast(&mut state, &owner);
        Ok(())
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock();
        Self::check_online(&state, "delete")?;

        let index = state
            .tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| StoreError::UnknownTask(task_id.to_string()))?;
        let owner = state.tasks.remove(index).owner_uid;
        tracing::debug!(task_id, owner = %owner, "task deleted");
        state.ops.deletes += 1;
        Self::broadcast(&mut state, &owner);
        Ok(())
    }

    fn subscribe(&self, owner_uid: &str) -> TaskFeed {
        let mut state = self.state.lock();
        let initial = Self::snapshot_for(&state, owner_uid);
        let tx = state
            .channels
            .entry(owner_uid.to_string())
            .or_insert_with(|| watch::channel(initial.clone()).0);
        // A subscriber joining an existing channel still needs the
        // latest state delivered promptly.
        tx.send_replace(initial);
        TaskFeed {
            owner_uid: owner_uid.to_string(),
            rx: tx.subscribe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterMode;
    use pretty_assertions::assert_eq;

    fn new_task(title: &str, owner: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{title} details"),
            owner_uid: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn subscribe_delivers_promptly_even_when_empty() {
        let store = MemoryStore::new();
        let feed = store.subscribe("u1");
        assert_eq!(feed.snapshot(), Vec::<Task>::new());
    }

    #[tokio::test]
    async fn snapshots_arrive_in_descending_creation_order() {
        let store = MemoryStore::new();
        let mut feed = store.subscribe("u1");

        store.create_task(new_task("First", "u1")).await.unwrap();
        store.create_task(new_task("Second", "u1")).await.unwrap();
        store.create_task(new_task("Third", "u1")).await.unwrap();

        let snapshot = feed.next().await.unwrap();
        let titles: Vec<&str> = snapshot.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn snapshots_are_scoped_to_the_owner() {
        let store = MemoryStore::new();
        store.create_task(new_task("Mine", "u1")).await.unwrap();
        store.create_task(new_task("Theirs", "u2")).await.unwrap();

        let feed = store.subscribe("u1");
        let snapshot = feed.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.iter().all(|t| t.owner_uid == "u1"));
    }

    #[tokio::test]
    async fn partial_update_flips_exactly_one_field() {
        let store = MemoryStore::new();
        store.create_task(new_task("Buy milk", "u1")).await.unwrap();
        let id = store.subscribe("u1").snapshot()[0].id.clone();

        store
            .update_task(&id, TaskPatch::favourite(true))
            .await
            .unwrap();

        let task = store.subscribe("u1").snapshot()[0].clone();
        assert!(task.favourite);
        assert!(!task.completed);
        assert!(FilterMode::Favourite.retains(&task));
    }

    #[tokio::test]
    async fn delete_removes_from_the_next_snapshot() {
        let store = MemoryStore::new();
        store.create_task(new_task("Buy milk", "u1")).await.unwrap();
        let mut feed = store.subscribe("u1");
        let id = feed.snapshot()[0].id.clone();

        store.delete_task(&id).await.unwrap();
        let snapshot = feed.next().await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn offline_store_rejects_writes_and_counts_nothing() {
        let store = MemoryStore::new();
        store.set_offline(true);

        let err = store.create_task(new_task("Nope", "u1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected { op: "create", .. }));
        assert_eq!(store.ops(), OpCounts::default());
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let store = MemoryStore::new();
        let err = store
            .update_task("missing", TaskPatch::completed(true))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownTask("missing".into()));
    }
}
