use sea_orm::entity::prelude::*;

/// Inventory car. Price is stored in whole currency units.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: i64,
    pub year: i32,
    pub mileage: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
