use crate::modules::category::entities::category;
use crate::modules::toko::entities::toko;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::product_photo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "produk")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(index)]
    pub id_toko: i32,
    #[sea_orm(index)]
    pub id_category: i32,
    pub nama_produk: String,
    pub slug: String,
    pub harga_reseller: i64,
    pub harga_konsumen: i64,
    pub stok: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub deskripsi: Option<String>,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "toko::Entity",
        from = "Column::IdToko",
        to = "toko::Column::Id"
    )]
    Toko,
    #[sea_orm(
        belongs_to = "category::Entity",
        from = "Column::IdCategory",
        to = "category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "product_photo::Entity")]
    ProductPhoto,
}

impl Related<toko::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toko.def()
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<product_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductPhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
