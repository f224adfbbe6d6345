use std::collections::BTreeSet;
use std::fmt;

/// Application roles. A user can hold any combination; elevated roles are
/// additive on top of the implicit `user` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AppRole {
    Admin,
    Moderator,
    User,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::User => "user",
        }
    }

    /// Parse a role name from its wire/database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "moderator" => Some(Self::Moderator),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of roles a user currently holds.
///
/// An empty set means the user is a plain `user`: elevated status comes only
/// from explicit grants, never from the absence of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<AppRole>);

impl RoleSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn insert(&mut self, role: AppRole) {
        self.0.insert(role);
    }

    pub fn contains(&self, role: AppRole) -> bool {
        self.0.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.0.contains(&AppRole::Admin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppRole> {
        self.0.iter()
    }

    /// Role names for API responses, sorted for stable output
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|r| r.as_str().to_string()).collect()
    }
}

impl FromIterator<AppRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = AppRole>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_roles() {
        for role in [AppRole::Admin, AppRole::Moderator, AppRole::User] {
            assert_eq!(AppRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(AppRole::parse("superuser"), None);
    }

    #[test]
    fn empty_set_is_plain_user() {
        let roles = RoleSet::new();
        assert!(roles.is_empty());
        assert!(!roles.is_admin());
        assert!(!roles.contains(AppRole::Moderator));
    }

    #[test]
    fn duplicate_inserts_collapse() {
        let mut roles = RoleSet::new();
        roles.insert(AppRole::Moderator);
        roles.insert(AppRole::Moderator);
        assert_eq!(roles.len(), 1);
    }
}
