use crate::modules::users::entities::{alamat, user};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::detail_trx;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "trx")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(index)]
    pub id_user: i32,
    pub alamat_pengiriman: i32,
    #[sea_orm(unique)]
    pub kode_invoice: String,
    pub method_bayar: String,
    pub harga_total: i64,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::IdUser",
        to = "user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "alamat::Entity",
        from = "Column::AlamatPengiriman",
        to = "alamat::Column::Id"
    )]
    Alamat,
    #[sea_orm(has_many = "detail_trx::Entity")]
    DetailTrx,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<alamat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alamat.def()
    }
}

impl Related<detail_trx::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DetailTrx.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
