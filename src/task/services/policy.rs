//! Owner-or-admin authorization policy for task access.

use crate::identity::domain::User;
use crate::task::domain::Task;

/// Authorization policy over task records.
///
/// All three checks share one rule: the actor owns the task or holds the
/// admin role. A failed check maps to a forbidden outcome at the API
/// boundary, distinct from not-found.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskPolicy;

impl TaskPolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns `true` when the actor may view the task.
    #[must_use]
    pub fn can_view(self, actor: &User, task: &Task) -> bool {
        owner_or_admin(actor, task)
    }

    /// Returns `true` when the actor may update the task.
    #[must_use]
    pub fn can_update(self, actor: &User, task: &Task) -> bool {
        owner_or_admin(actor, task)
    }

    /// Returns `true` when the actor may delete the task.
    #[must_use]
    pub fn can_delete(self, actor: &User, task: &Task) -> bool {
        owner_or_admin(actor, task)
    }
}

fn owner_or_admin(actor: &User, task: &Task) -> bool {
    actor.id() == task.owner_id() || actor.role().is_admin()
}
