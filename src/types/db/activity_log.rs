use sea_orm::entity::prelude::*;

/// SeaORM entity for the activity_logs table.
/// `details` holds a JSON object serialized to text.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub actor_id: String,
    pub action: String,
    pub target_user_id: Option<String>,
    pub target_name: Option<String>,
    pub details: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
