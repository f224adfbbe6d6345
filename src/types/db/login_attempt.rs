use sea_orm::entity::prelude::*;

/// SeaORM entity for the append-only login_attempts table.
/// Rows are never updated or deleted; lockout state is derived from them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "login_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub success: bool,
    pub failure_reason: Option<String>,
    pub user_id: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
