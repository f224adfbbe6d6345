use std::sync::Arc;

use crate::stores::ActivityLogStore;
use crate::types::internal::activity::{ActivityAction, ActivityEvent};
use crate::types::internal::context::RequestContext;
use crate::types::internal::roles::AppRole;

/// Best-effort audit trail for role mutations.
///
/// Every method is fire-and-forget: a failed write is reported via
/// `tracing::error!` and never propagated, so audit problems cannot block or
/// roll back the mutation they describe. A crash between mutation and log
/// write loses the entry; that is an accepted trade-off, not a bug.
pub struct ActivityLogger {
    store: Arc<ActivityLogStore>,
}

impl ActivityLogger {
    pub fn new(store: Arc<ActivityLogStore>) -> Self {
        Self { store }
    }

    /// Record a single-role grant.
    pub async fn role_added(
        &self,
        ctx: &RequestContext,
        target_user_id: &str,
        target_name: Option<String>,
        role: AppRole,
    ) {
        let event = ActivityEvent::new(ctx.actor_id.clone(), ActivityAction::RoleAdded)
            .target(target_user_id, target_name)
            .detail("role", role.as_str());
        self.write(event).await;
    }

    /// Record a single-role revocation.
    pub async fn role_removed(
        &self,
        ctx: &RequestContext,
        target_user_id: &str,
        target_name: Option<String>,
        role: AppRole,
    ) {
        let event = ActivityEvent::new(ctx.actor_id.clone(), ActivityAction::RoleRemoved)
            .target(target_user_id, target_name)
            .detail("role", role.as_str());
        self.write(event).await;
    }

    /// Record the aggregate entry for a bulk mutation. One entry per batch,
    /// carrying the count of members actually mutated.
    pub async fn bulk_role_change(
        &self,
        ctx: &RequestContext,
        action: ActivityAction,
        role: AppRole,
        mutated_count: u64,
        selection_size: usize,
    ) {
        let event = ActivityEvent::new(ctx.actor_id.clone(), action)
            .detail("role", role.as_str())
            .detail("bulk_count", mutated_count)
            .detail("selection_size", selection_size);
        self.write(event).await;
    }

    async fn write(&self, event: ActivityEvent) {
        let action = event.action;
        if let Err(err) = self.store.write_event(event).await {
            tracing::error!("Failed to write activity log entry for {}: {:?}", action, err);
        }
    }
}
