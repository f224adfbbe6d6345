use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::{InternalError, ProfileError};
use crate::stores::is_unique_violation;
use crate::types::db::profile;

/// ProfileStore manages customer/admin accounts and credential verification.
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new profile with an Argon2id password hash.
    ///
    /// # Returns
    /// * `Ok(profile::Model)` - The created profile
    /// * `Err(InternalError::Profile(DuplicateEmail))` - Email already registered
    pub async fn create_profile(
        &self,
        email: String,
        password: &str,
        full_name: Option<String>,
        phone: Option<String>,
    ) -> Result<profile::Model, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?
            .to_string();

        let now = Utc::now().timestamp();
        let new_profile = profile::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            full_name: Set(full_name),
            phone: Set(phone),
            avatar_url: Set(None),
            bio: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_profile.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::Profile(ProfileError::DuplicateEmail(email.clone()))
            } else {
                InternalError::database("create_profile", e)
            }
        })
    }

    /// Verify an email/password pair and return the matching profile.
    ///
    /// Unknown email and wrong password both collapse into
    /// `ProfileError::InvalidCredentials` so the response does not reveal
    /// which half was wrong.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<profile::Model, InternalError> {
        let user = profile::Entity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("verify_credentials", e))?
            .ok_or(ProfileError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| ProfileError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| ProfileError::InvalidCredentials)?;

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<profile::Model, InternalError> {
        profile::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_profile_by_id", e))?
            .ok_or_else(|| InternalError::Profile(ProfileError::NotFound(user_id.to_owned())))
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<profile::Model>, InternalError> {
        profile::Entity::find()
            .filter(profile::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_profile_by_email", e))
    }

    /// Paginated profile listing for the admin user table, newest first.
    /// `search` matches email or full name as a substring.
    pub async fn list(
        &self,
        search: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<profile::Model>, InternalError> {
        let mut query = profile::Entity::find();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(profile::Column::Email.like(pattern.clone()))
                    .add(profile::Column::FullName.like(pattern)),
            );
        }

        query
            .order_by_desc(profile::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_profiles", e))
    }

    pub async fn count(&self, search: Option<&str>) -> Result<u64, InternalError> {
        let mut query = profile::Entity::find();

        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(profile::Column::Email.like(pattern.clone()))
                    .add(profile::Column::FullName.like(pattern)),
            );
        }

        query
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_profiles", e))
    }

    /// Field-level profile update for the customer self-service page.
    pub async fn update_profile(
        &self,
        user_id: &str,
        full_name: Option<String>,
        phone: Option<String>,
        avatar_url: Option<String>,
        bio: Option<String>,
    ) -> Result<profile::Model, InternalError> {
        let existing = self.find_by_id(user_id).await?;

        let mut model: profile::ActiveModel = existing.into();
        if let Some(full_name) = full_name {
            model.full_name = Set(Some(full_name));
        }
        if let Some(phone) = phone {
            model.phone = Set(Some(phone));
        }
        if let Some(avatar_url) = avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }
        if let Some(bio) = bio {
            model.bio = Set(Some(bio));
        }
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_profile", e))
    }
}
