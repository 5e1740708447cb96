//! CRUD facade orchestrating store, policy, cache, and notification queue.

use crate::api::error::{ApiError, ApiResult};
use crate::api::validation::{self, TaskPayload};
use crate::identity::domain::User;
use crate::notification::{
    domain::{NotificationAction, NotificationJob},
    ports::NotificationQueue,
};
use crate::task::{
    domain::{StatusFilter, Task, TaskId, TaskStatus},
    ports::{CacheKey, ListingCache, TaskRepository},
    services::TaskPolicy,
};
use mockable::Clock;
use std::sync::Arc;

/// Outcome message for successful creates.
pub const CREATED_MESSAGE: &str = "Task created successfully.";
/// Outcome message for successful updates.
pub const UPDATED_MESSAGE: &str = "Task updated successfully.";
/// Outcome message for successful deletes.
pub const DELETED_MESSAGE: &str = "Task deleted successfully.";

/// Task CRUD facade.
///
/// Each operation is a single synchronous transaction: authorization and
/// validation terminate the request before any side effect, and a write
/// commits store change, cache invalidation, and notification enqueue before
/// the response returns. The only asynchronous work relative to the response
/// is the notification delivery itself, which runs behind the queue port.
#[derive(Clone)]
pub struct TaskApi<R, C, Q, K>
where
    R: TaskRepository,
    C: ListingCache,
    Q: NotificationQueue,
    K: Clock + Send + Sync,
{
    repository: Arc<R>,
    cache: Arc<C>,
    queue: Arc<Q>,
    policy: TaskPolicy,
    clock: Arc<K>,
}

impl<R, C, Q, K> TaskApi<R, C, Q, K>
where
    R: TaskRepository,
    C: ListingCache,
    Q: NotificationQueue,
    K: Clock + Send + Sync,
{
    /// Creates a facade over the given collaborators.
    #[must_use]
    pub const fn new(repository: Arc<R>, cache: Arc<C>, queue: Arc<Q>, clock: Arc<K>) -> Self {
        Self {
            repository,
            cache,
            queue,
            policy: TaskPolicy::new(),
            clock,
        }
    }

    /// Lists the actor's tasks, newest-created first, through the cache.
    ///
    /// On a cache hit within the TTL the repository is not consulted; on a
    /// miss the listing is computed and memoized.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the repository or cache backend
    /// fails.
    pub async fn list(&self, actor: &User, filter: StatusFilter) -> ApiResult<Vec<Task>> {
        let key = CacheKey::new(actor.id(), filter);
        if let Some(hit) = self.cache.get(&key).await? {
            return Ok(hit);
        }
        let tasks = self
            .repository
            .list_for_owner(actor.id(), filter)
            .await?;
        self.cache.put(key, tasks.clone()).await?;
        Ok(tasks)
    }

    /// Creates a task owned by the actor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on rule failures or a duplicate
    /// title, or [`ApiError::Internal`] on infrastructure failure.
    pub async fn create(&self, actor: &User, payload: &TaskPayload) -> ApiResult<Task> {
        let valid = validation::validate(payload)?;
        let task = Task::new(
            actor.id(),
            valid.title,
            valid.description.resolve(None),
            Some(valid.status),
            &*self.clock,
        );
        self.repository.create(&task).await?;
        self.cache.invalidate_owner(actor.id()).await?;
        self.dispatch(&task, NotificationAction::Created).await?;
        tracing::info!(task_id = %task.id(), owner_id = %actor.id(), "task created");
        Ok(task)
    }

    /// Shows a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no such task exists,
    /// [`ApiError::Forbidden`] when the actor is neither owner nor admin, or
    /// [`ApiError::Internal`] on infrastructure failure.
    pub async fn show(&self, actor: &User, id: TaskId) -> ApiResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if !self.policy.can_view(actor, &task) {
            return Err(ApiError::Forbidden);
        }
        Ok(task)
    }

    /// Updates a task's title, description, and status.
    ///
    /// Dispatches one `updated` notification, plus one `completed`
    /// notification when the status transitions from a non-done value to
    /// done. A cross-owner update (admin editing another user's task) also
    /// invalidates the actor's own cache keys.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`], [`ApiError::Forbidden`],
    /// [`ApiError::Validation`], or [`ApiError::Internal`] per the taxonomy.
    pub async fn update(&self, actor: &User, id: TaskId, payload: &TaskPayload) -> ApiResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if !self.policy.can_update(actor, &task) {
            return Err(ApiError::Forbidden);
        }
        let valid = validation::validate(payload)?;

        let previous_status = task.status();
        task.apply(valid.into(), &*self.clock);
        self.repository.update(&task).await?;

        self.cache.invalidate_owner(task.owner_id()).await?;
        if actor.id() != task.owner_id() {
            self.cache.invalidate_owner(actor.id()).await?;
        }

        self.dispatch(&task, NotificationAction::Updated).await?;
        if previous_status != TaskStatus::Done && task.status() == TaskStatus::Done {
            self.dispatch(&task, NotificationAction::Completed).await?;
        }
        tracing::info!(task_id = %task.id(), actor_id = %actor.id(), "task updated");
        Ok(task)
    }

    /// Permanently deletes a task. No notification is dispatched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`], [`ApiError::Forbidden`], or
    /// [`ApiError::Internal`] per the taxonomy.
    pub async fn delete(&self, actor: &User, id: TaskId) -> ApiResult<()> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound)?;
        if !self.policy.can_delete(actor, &task) {
            return Err(ApiError::Forbidden);
        }

        let owner_id = task.owner_id();
        self.repository.delete(id).await?;

        self.cache.invalidate_owner(owner_id).await?;
        if actor.id() != owner_id {
            self.cache.invalidate_owner(actor.id()).await?;
        }
        tracing::info!(task_id = %id, actor_id = %actor.id(), "task deleted");
        Ok(())
    }

    async fn dispatch(&self, task: &Task, action: NotificationAction) -> ApiResult<()> {
        self.queue
            .enqueue(NotificationJob::new(task.clone(), action))
            .await?;
        Ok(())
    }
}
