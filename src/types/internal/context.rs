use crate::types::internal::auth::Claims;

/// Per-request context threaded from the API layer into services.
///
/// Carries who is acting plus enough request metadata for audit trails.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor_id: String,
    pub actor_email: String,
    pub user_agent: Option<String>,
}

impl RequestContext {
    pub fn from_claims(claims: &Claims, user_agent: Option<String>) -> Self {
        Self {
            actor_id: claims.sub.clone(),
            actor_email: claims.email.clone(),
            user_agent,
        }
    }

    #[cfg(test)]
    pub fn for_tests(actor_id: &str) -> Self {
        Self {
            actor_id: actor_id.to_string(),
            actor_email: format!("{actor_id}@example.com"),
            user_agent: None,
        }
    }
}
