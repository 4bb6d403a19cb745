use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nama: String,
    #[sea_orm(unique, index)]
    pub email: String,
    #[serde(skip_serializing)]
    pub kata_sandi: String,
    #[sea_orm(unique, index)]
    pub no_telp: String,
    pub tanggal_lahir: Option<Date>,
    pub jenis_kelamin: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tentang: Option<String>,
    pub pekerjaan: Option<String>,
    pub id_provinsi: Option<i32>,
    pub id_kota: Option<i32>,
    pub is_admin: bool,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alamat::Entity")]
    Alamat,
    #[sea_orm(has_one = "crate::modules::toko::entities::toko::Entity")]
    Toko,
    #[sea_orm(has_many = "crate::modules::trx::entities::trx::Entity")]
    Trx,
}

impl Related<super::alamat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alamat.def()
    }
}

impl Related<crate::modules::toko::entities::toko::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toko.def()
    }
}

impl Related<crate::modules::trx::entities::trx::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trx.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
