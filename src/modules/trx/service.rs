use std::collections::HashMap;
use std::sync::Arc;

use super::dtos::{CreateTrxDto, NewOrder, OrderLine, TrxWithDetails};
use super::repository::TrxRepository;
use crate::modules::product::repository::ProductRepository;
use crate::modules::users::repository::AlamatRepository;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone)]
pub struct TrxService {
    trxs: Arc<dyn TrxRepository>,
    products: Arc<dyn ProductRepository>,
    alamat: Arc<dyn AlamatRepository>,
}

impl TrxService {
    pub fn new(
        trxs: Arc<dyn TrxRepository>,
        products: Arc<dyn ProductRepository>,
        alamat: Arc<dyn AlamatRepository>,
    ) -> Self {
        Self {
            trxs,
            products,
            alamat,
        }
    }

    pub async fn list_orders(&self, user_id: i32) -> AppResult<Vec<TrxWithDetails>> {
        self.trxs.find_by_user_id(user_id).await
    }

    pub async fn get_order(&self, user_id: i32, id: i32) -> AppResult<TrxWithDetails> {
        self.trxs
            .find_by_id_and_user_id(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("trx not found".to_string()))
    }

    /// Validates every line against current stock, prices it at the consumer price
    /// and writes the order. Nothing is written unless every line passes.
    pub async fn create_order(
        &self,
        user_id: i32,
        payload: CreateTrxDto,
    ) -> AppResult<TrxWithDetails> {
        if payload.detail_trx.is_empty() {
            return Err(AppError::BadRequest(
                "detail_trx must contain at least one item".to_string(),
            ));
        }
        if payload.detail_trx.iter().any(|item| item.kuantitas <= 0) {
            return Err(AppError::BadRequest(
                "kuantitas must be greater than zero".to_string(),
            ));
        }
        self.alamat
            .find_by_id_and_user_id(payload.alamat_kirim, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("alamat not found".to_string()))?;

        // Lines naming the same product draw on one stock.
        let mut requested: HashMap<i32, i64> = HashMap::new();
        let mut harga_total: i64 = 0;
        let mut lines = Vec::with_capacity(payload.detail_trx.len());

        for item in &payload.detail_trx {
            let product = self
                .products
                .find_by_id(item.product_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("product with ID {} not found", item.product_id))
                })?;

            let total_requested = requested.entry(product.id).or_insert(0);
            *total_requested += i64::from(item.kuantitas);
            if *total_requested > i64::from(product.stok) {
                return Err(AppError::BadRequest(format!(
                    "stock for product {} is insufficient",
                    product.nama_produk
                )));
            }

            let line_total = i64::from(item.kuantitas)
                .checked_mul(product.harga_konsumen)
                .ok_or_else(total_too_large)?;
            harga_total = harga_total
                .checked_add(line_total)
                .ok_or_else(total_too_large)?;

            lines.push(OrderLine {
                id_produk: product.id,
                id_toko: product.id_toko,
                kuantitas: item.kuantitas,
                harga_total: line_total,
            });
        }

        let order = NewOrder {
            id_user: user_id,
            alamat_pengiriman: payload.alamat_kirim,
            kode_invoice: generate_invoice_code(),
            method_bayar: payload.method_bayar,
            harga_total,
            lines,
        };

        let created = self.trxs.create(order).await?;
        tracing::info!(
            "Created trx {} ({}) for user {} with total {}",
            created.trx.id,
            created.trx.kode_invoice,
            user_id,
            created.trx.harga_total
        );
        Ok(created)
    }
}

fn total_too_large() -> AppError {
    AppError::BadRequest("order total is too large".to_string())
}

fn generate_invoice_code() -> String {
    format!(
        "INV-{}",
        uuid::Uuid::new_v4().simple().to_string().to_uppercase()
    )
}
