use std::collections::HashMap;
use std::fmt;

/// Actions recorded in the activity log. Role mutations only; the log is an
/// audit trail for the admin console, not a general event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    RoleAdded,
    RoleRemoved,
    BulkRoleAdded,
    BulkRoleRemoved,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoleAdded => "role_added",
            Self::RoleRemoved => "role_removed",
            Self::BulkRoleAdded => "bulk_role_added",
            Self::BulkRoleRemoved => "bulk_role_removed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "role_added" => Some(Self::RoleAdded),
            "role_removed" => Some(Self::RoleRemoved),
            "bulk_role_added" => Some(Self::BulkRoleAdded),
            "bulk_role_removed" => Some(Self::BulkRoleRemoved),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One activity event prior to storage. `details` is serialized to JSON text
/// by the store.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub actor_id: String,
    pub action: ActivityAction,
    pub target_user_id: Option<String>,
    pub target_name: Option<String>,
    pub details: HashMap<String, serde_json::Value>,
}

impl ActivityEvent {
    pub fn new(actor_id: impl Into<String>, action: ActivityAction) -> Self {
        Self {
            actor_id: actor_id.into(),
            action,
            target_user_id: None,
            target_name: None,
            details: HashMap::new(),
        }
    }

    pub fn target(mut self, user_id: impl Into<String>, name: Option<String>) -> Self {
        self.target_user_id = Some(user_id.into());
        self.target_name = name;
        self
    }

    pub fn detail(mut self, key: impl Into<String>, value: impl serde::Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.details.insert(key.into(), json_value);
        }
        self
    }
}
