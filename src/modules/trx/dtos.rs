use serde::{Deserialize, Serialize};

use super::entities::{detail_trx, trx};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrxDto {
    pub method_bayar: String,
    pub alamat_kirim: i32,
    pub detail_trx: Vec<DetailTrxDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailTrxDto {
    pub product_id: i32,
    pub kuantitas: i32,
}

/// Validated order, ready to be written in one transaction.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub id_user: i32,
    pub alamat_pengiriman: i32,
    pub kode_invoice: String,
    pub method_bayar: String,
    pub harga_total: i64,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id_produk: i32,
    pub id_toko: i32,
    pub kuantitas: i32,
    pub harga_total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrxWithDetails {
    #[serde(flatten)]
    pub trx: trx::Model,
    pub detail_trx: Vec<detail_trx::Model>,
}

impl From<(trx::Model, Vec<detail_trx::Model>)> for TrxWithDetails {
    fn from((trx, detail_trx): (trx::Model, Vec<detail_trx::Model>)) -> Self {
        Self { trx, detail_trx }
    }
}
