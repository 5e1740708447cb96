//! Thread-safe in-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::task::{
    domain::{StatusFilter, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Title uniqueness is enforced under the state lock, so a duplicate check
/// and the subsequent insert are atomic per title.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    title_index: HashMap<String, TaskId>,
    next_seq: u64,
}

/// Task record plus the insertion sequence used as an ordering tie-break.
#[derive(Debug, Clone)]
struct StoredTask {
    task: Task,
    seq: u64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let title_key = task.title().as_str().to_owned();
        if state.title_index.contains_key(&title_key) {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.title_index.insert(title_key, task.id());
        state.tasks.insert(
            task.id(),
            StoredTask {
                task: task.clone(),
                seq,
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        let title_key = task.title().as_str().to_owned();
        if let Some(holder) = state.title_index.get(&title_key)
            && *holder != task.id()
        {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
        }

        state.title_index.remove(old_task.task.title().as_str());
        state.title_index.insert(title_key, task.id());
        state.tasks.insert(
            task.id(),
            StoredTask {
                task: task.clone(),
                seq: old_task.seq,
            },
        );
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        state.title_index.remove(removed.task.title().as_str());
        Ok(())
    }

    async fn list_for_owner(
        &self,
        owner_id: UserId,
        filter: StatusFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut matching: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|stored| {
                stored.task.owner_id() == owner_id && filter.matches(stored.task.status())
            })
            .collect();
        // Newest-created first; insertion order breaks timestamp ties.
        matching.sort_by(|a, b| {
            b.task
                .created_at()
                .cmp(&a.task.created_at())
                .then(b.seq.cmp(&a.seq))
        });
        Ok(matching.into_iter().map(|stored| stored.task.clone()).collect())
    }
}
