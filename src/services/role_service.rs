use std::sync::Arc;

use crate::errors::{InternalError, RoleError};
use crate::services::ActivityLogger;
use crate::stores::{ProfileStore, RoleStore};
use crate::types::internal::activity::ActivityAction;
use crate::types::internal::context::RequestContext;
use crate::types::internal::roles::{AppRole, RoleSet};

/// Direction of a bulk role mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDirection {
    Add,
    Remove,
}

/// Aggregate result of a bulk mutation.
///
/// Best-effort batch semantics: `mutated` counts only members whose role rows
/// actually changed, `skipped` covers the actor and already-satisfied members,
/// `failed` covers members whose individual mutation errored. One member
/// failing never aborts the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub mutated: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Role resolution and mutation orchestrator.
///
/// Resolution is a fresh set lookup per call. Mutations write exactly one
/// role row, then one activity-log entry (fire-and-forget), in that order.
pub struct RoleService {
    role_store: Arc<RoleStore>,
    profile_store: Arc<ProfileStore>,
    activity: Arc<ActivityLogger>,
}

impl RoleService {
    pub fn new(
        role_store: Arc<RoleStore>,
        profile_store: Arc<ProfileStore>,
        activity: Arc<ActivityLogger>,
    ) -> Self {
        Self {
            role_store,
            profile_store,
            activity,
        }
    }

    /// The set of roles held by a user; empty means plain `user`.
    pub async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, InternalError> {
        self.role_store.roles_for_user(user_id).await
    }

    /// Capability check used at the admin API boundary. Errors propagate so
    /// the guard can fail closed.
    pub async fn is_admin(&self, user_id: &str) -> Result<bool, InternalError> {
        Ok(self.roles_for_user(user_id).await?.is_admin())
    }

    /// Grant one role to one user.
    ///
    /// Self-mutation is rejected before any store call: an admin can never
    /// change their own role rows through this interface.
    pub async fn add_role(
        &self,
        ctx: &RequestContext,
        target_user_id: &str,
        role: AppRole,
    ) -> Result<(), InternalError> {
        if ctx.actor_id == target_user_id {
            return Err(RoleError::SelfModificationDenied.into());
        }

        self.role_store.add_role(target_user_id, role).await?;

        let target_name = self.display_name(target_user_id).await;
        self.activity
            .role_added(ctx, target_user_id, target_name, role)
            .await;

        tracing::info!(
            "Role {} added to user {} by {}",
            role,
            target_user_id,
            ctx.actor_id
        );

        Ok(())
    }

    /// Revoke one role from one user. Same self-mutation guard as `add_role`.
    pub async fn remove_role(
        &self,
        ctx: &RequestContext,
        target_user_id: &str,
        role: AppRole,
    ) -> Result<(), InternalError> {
        if ctx.actor_id == target_user_id {
            return Err(RoleError::SelfModificationDenied.into());
        }

        self.role_store.remove_role(target_user_id, role).await?;

        let target_name = self.display_name(target_user_id).await;
        self.activity
            .role_removed(ctx, target_user_id, target_name, role)
            .await;

        tracing::info!(
            "Role {} removed from user {} by {}",
            role,
            target_user_id,
            ctx.actor_id
        );

        Ok(())
    }

    /// Apply one role change across a selection of users.
    ///
    /// Targets are processed sequentially in selection order, one store call
    /// in flight at a time, so partial-failure accounting stays predictable:
    /// - the acting identity is skipped unconditionally;
    /// - already-satisfied targets are skipped, making the batch idempotent
    ///   per identity;
    /// - a failing target is counted and the batch continues.
    ///
    /// After the batch, exactly one aggregate activity entry is written with
    /// the mutated count. An empty selection is a no-op and logs nothing.
    pub async fn bulk_mutate(
        &self,
        ctx: &RequestContext,
        target_user_ids: &[String],
        direction: BulkDirection,
        role: AppRole,
    ) -> Result<BulkOutcome, InternalError> {
        if target_user_ids.is_empty() {
            return Ok(BulkOutcome::default());
        }

        let mut outcome = BulkOutcome::default();

        for target in target_user_ids {
            if *target == ctx.actor_id {
                outcome.skipped += 1;
                continue;
            }

            match self.mutate_one(target, direction, role).await {
                Ok(true) => outcome.mutated += 1,
                Ok(false) => outcome.skipped += 1,
                Err(err) => {
                    outcome.failed += 1;
                    tracing::warn!(
                        "Bulk role mutation failed for user {}: {:?}",
                        target,
                        err
                    );
                }
            }
        }

        let action = match direction {
            BulkDirection::Add => ActivityAction::BulkRoleAdded,
            BulkDirection::Remove => ActivityAction::BulkRoleRemoved,
        };
        self.activity
            .bulk_role_change(ctx, action, role, outcome.mutated, target_user_ids.len())
            .await;

        tracing::info!(
            "Bulk role mutation by {}: {} mutated, {} skipped, {} failed",
            ctx.actor_id,
            outcome.mutated,
            outcome.skipped,
            outcome.failed
        );

        Ok(outcome)
    }

    /// Returns Ok(true) if a row changed, Ok(false) if the target already
    /// satisfied the requested state.
    async fn mutate_one(
        &self,
        target: &str,
        direction: BulkDirection,
        role: AppRole,
    ) -> Result<bool, InternalError> {
        let current = self.role_store.roles_for_user(target).await?;

        match direction {
            BulkDirection::Add => {
                if current.contains(role) {
                    return Ok(false);
                }
                match self.role_store.add_role(target, role).await {
                    Ok(()) => Ok(true),
                    // Lost a race with a concurrent grant; target is satisfied
                    Err(InternalError::Role(RoleError::AlreadyAssigned { .. })) => Ok(false),
                    Err(err) => Err(err),
                }
            }
            BulkDirection::Remove => {
                if !current.contains(role) {
                    return Ok(false);
                }
                match self.role_store.remove_role(target, role).await {
                    Ok(()) => Ok(true),
                    Err(InternalError::Role(RoleError::NotAssigned { .. })) => Ok(false),
                    Err(err) => Err(err),
                }
            }
        }
    }

    /// Display name for activity entries; resolution failure degrades to None
    /// rather than failing the mutation that already happened.
    async fn display_name(&self, user_id: &str) -> Option<String> {
        match self.profile_store.find_by_id(user_id).await {
            Ok(profile) => profile.full_name.or(Some(profile.email)),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "role_service_tests.rs"]
mod role_service_tests;
