use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;

use crate::modules::product::entities::product;
use crate::modules::trx::dtos::{NewOrder, OrderLine, TrxWithDetails};
use crate::modules::trx::entities::{detail_trx, trx};
use crate::modules::trx::repository::TrxRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::{now, InMemoryRepository, SeaOrmRepository};

fn stock_conflict(line: &OrderLine) -> AppError {
    AppError::Conflict(format!(
        "stock for product {} is insufficient",
        line.id_produk
    ))
}

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresTrxRepository = SeaOrmRepository<trx::Entity>;

#[async_trait]
impl TrxRepository for PostgresTrxRepository {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<TrxWithDetails>> {
        let rows = trx::Entity::find()
            .filter(trx::Column::IdUser.eq(id_user))
            .order_by_desc(trx::Column::Id)
            .find_with_related(detail_trx::Entity)
            .all(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(rows.into_iter().map(TrxWithDetails::from).collect())
    }

    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<TrxWithDetails>> {
        let rows = trx::Entity::find()
            .filter(trx::Column::Id.eq(id))
            .filter(trx::Column::IdUser.eq(id_user))
            .find_with_related(detail_trx::Entity)
            .all(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(rows.into_iter().next().map(TrxWithDetails::from))
    }

    async fn create(&self, order: NewOrder) -> AppResult<TrxWithDetails> {
        let txn = self.db().begin().await.map_err(AppError::DbError)?;
        let res = Self::create_order_internal(&txn, order).await;
        if res.is_ok() {
            txn.commit().await.map_err(AppError::DbError)?;
        } else {
            txn.rollback().await.map_err(AppError::DbError)?;
        }
        res
    }
}

impl SeaOrmRepository<trx::Entity> {
    async fn create_order_internal<C>(db: &C, order: NewOrder) -> AppResult<TrxWithDetails>
    where
        C: ConnectionTrait,
    {
        let ts = now();

        for line in &order.lines {
            let res = product::Entity::update_many()
                .col_expr(
                    product::Column::Stok,
                    Expr::col(product::Column::Stok).sub(line.kuantitas),
                )
                .col_expr(product::Column::UpdatedAt, Expr::value(ts))
                .filter(product::Column::Id.eq(line.id_produk))
                .filter(product::Column::Stok.gte(line.kuantitas))
                .exec(db)
                .await
                .map_err(AppError::DbError)?;
            if res.rows_affected == 0 {
                return Err(stock_conflict(line));
            }
        }

        let created_trx = trx::ActiveModel {
            id_user: Set(order.id_user),
            alamat_pengiriman: Set(order.alamat_pengiriman),
            kode_invoice: Set(order.kode_invoice),
            method_bayar: Set(order.method_bayar),
            harga_total: Set(order.harga_total),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(AppError::DbError)?;

        let mut details = Vec::with_capacity(order.lines.len());
        for line in order.lines {
            let detail = detail_trx::ActiveModel {
                id_trx: Set(created_trx.id),
                id_produk: Set(line.id_produk),
                id_toko: Set(line.id_toko),
                kuantitas: Set(line.kuantitas),
                harga_total: Set(line.harga_total),
                created_at: Set(ts),
                updated_at: Set(ts),
                ..Default::default()
            }
            .insert(db)
            .await
            .map_err(AppError::DbError)?;
            details.push(detail);
        }

        Ok(TrxWithDetails {
            trx: created_trx,
            detail_trx: details,
        })
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

pub type InMemoryTrxRepository = InMemoryRepository<trx::Entity>;

#[async_trait]
impl TrxRepository for InMemoryTrxRepository {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<TrxWithDetails>> {
        let tables = self.db.lock()?;
        Ok(tables
            .trx
            .values()
            .rev()
            .filter(|t| t.id_user == id_user)
            .map(|t| TrxWithDetails {
                trx: t.clone(),
                detail_trx: tables
                    .detail_trx
                    .values()
                    .filter(|d| d.id_trx == t.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<TrxWithDetails>> {
        let tables = self.db.lock()?;
        Ok(tables
            .trx
            .get(&id)
            .filter(|t| t.id_user == id_user)
            .map(|t| TrxWithDetails {
                trx: t.clone(),
                detail_trx: tables
                    .detail_trx
                    .values()
                    .filter(|d| d.id_trx == t.id)
                    .cloned()
                    .collect(),
            }))
    }

    async fn create(&self, order: NewOrder) -> AppResult<TrxWithDetails> {
        let mut tables = self.db.lock()?;
        let ts = now();

        // Check every line before touching anything so a failure leaves no trace.
        let mut taken: HashMap<i32, i32> = HashMap::new();
        for line in &order.lines {
            let already = taken.entry(line.id_produk).or_insert(0);
            let available = tables.product.get(&line.id_produk).map(|p| p.stok - *already);
            if available.map_or(true, |stok| stok < line.kuantitas) {
                return Err(stock_conflict(line));
            }
            *already += line.kuantitas;
        }
        for line in &order.lines {
            if let Some(p) = tables.product.get_mut(&line.id_produk) {
                p.stok -= line.kuantitas;
                p.updated_at = ts;
            }
        }

        let created_trx = trx::Model {
            id: tables.next_id("trx"),
            id_user: order.id_user,
            alamat_pengiriman: order.alamat_pengiriman,
            kode_invoice: order.kode_invoice,
            method_bayar: order.method_bayar,
            harga_total: order.harga_total,
            created_at: ts,
            updated_at: ts,
        };
        tables.trx.insert(created_trx.id, created_trx.clone());

        let mut details = Vec::with_capacity(order.lines.len());
        for line in order.lines {
            let detail = detail_trx::Model {
                id: tables.next_id("detail_trx"),
                id_trx: created_trx.id,
                id_produk: line.id_produk,
                id_toko: line.id_toko,
                kuantitas: line.kuantitas,
                harga_total: line.harga_total,
                created_at: ts,
                updated_at: ts,
            };
            tables.detail_trx.insert(detail.id, detail.clone());
            details.push(detail);
        }

        Ok(TrxWithDetails {
            trx: created_trx,
            detail_trx: details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn order() -> NewOrder {
        NewOrder {
            id_user: 1,
            alamat_pengiriman: 1,
            kode_invoice: "INV-TEST".to_string(),
            method_bayar: "transfer".to_string(),
            harga_total: 2000,
            lines: vec![OrderLine {
                id_produk: 3,
                id_toko: 1,
                kuantitas: 2,
                harga_total: 2000,
            }],
        }
    }

    #[tokio::test]
    async fn postgres_create_fails_when_stock_decrement_matches_nothing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PostgresTrxRepository::new(Arc::new(db));

        let result = repo.create(order()).await;

        assert!(
            matches!(result, Err(AppError::Conflict(msg)) if msg == "stock for product 3 is insufficient")
        );
    }

    #[tokio::test]
    async fn in_memory_create_counts_repeated_lines_against_one_stock() {
        let db = crate::shared::infra::repository::InMemoryDatabase::new();
        {
            let mut tables = db.lock().unwrap();
            let ts = now();
            tables.product.insert(
                3,
                product::Model {
                    id: 3,
                    id_toko: 1,
                    id_category: 1,
                    nama_produk: "Gula".to_string(),
                    slug: "gula".to_string(),
                    harga_reseller: 1000,
                    harga_konsumen: 1000,
                    stok: 3,
                    deskripsi: None,
                    created_at: ts,
                    updated_at: ts,
                },
            );
        }
        let repo = InMemoryTrxRepository::new(db.clone());
        let mut twice = order();
        twice.lines.push(twice.lines[0].clone());

        let result = repo.create(twice).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let tables = db.lock().unwrap();
        assert_eq!(tables.product[&3].stok, 3);
        assert!(tables.trx.is_empty());
    }

    #[tokio::test]
    async fn postgres_find_by_user_id_groups_lines_under_orders() {
        let ts = now();
        let t = trx::Model {
            id: 5,
            id_user: 1,
            alamat_pengiriman: 1,
            kode_invoice: "INV-A".to_string(),
            method_bayar: "cod".to_string(),
            harga_total: 500,
            created_at: ts,
            updated_at: ts,
        };
        let d = detail_trx::Model {
            id: 8,
            id_trx: 5,
            id_produk: 3,
            id_toko: 1,
            kuantitas: 1,
            harga_total: 500,
            created_at: ts,
            updated_at: ts,
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(t, d)]])
            .into_connection();
        let repo = PostgresTrxRepository::new(Arc::new(db));

        let orders = repo.find_by_user_id(1).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].detail_trx.len(), 1);
        assert_eq!(orders[0].detail_trx[0].id, 8);
    }
}
