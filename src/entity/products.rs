use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::domain::entities::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub cost: f64,
    pub shippable: bool,
    pub free_delivery: bool,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub long_description: String,
    #[sea_orm(column_type = "Text")]
    pub product_details: String,
    pub image_path: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id.into(),
            company_id: m.company_id.into(),
            name: m.name,
            cost: m.cost,
            shippable: m.shippable,
            free_delivery: m.free_delivery,
            short_description: m.short_description,
            long_description: m.long_description,
            product_details: m.product_details,
            image_path: m.image_path,
            created_at: m
                .created_at
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
