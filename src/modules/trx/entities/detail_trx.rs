use crate::modules::product::entities::product;
use crate::modules::toko::entities::toko;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::trx;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "detail_trx")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(index)]
    pub id_trx: i32,
    pub id_produk: i32,
    pub id_toko: i32,
    pub kuantitas: i32,
    pub harga_total: i64,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "trx::Entity",
        from = "Column::IdTrx",
        to = "trx::Column::Id"
    )]
    Trx,
    #[sea_orm(
        belongs_to = "product::Entity",
        from = "Column::IdProduk",
        to = "product::Column::Id"
    )]
    Product,
    #[sea_orm(
        belongs_to = "toko::Entity",
        from = "Column::IdToko",
        to = "toko::Column::Id"
    )]
    Toko,
}

impl Related<trx::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trx.def()
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<toko::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toko.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
