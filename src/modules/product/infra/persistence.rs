use async_trait::async_trait;
use sea_orm::*;

use crate::modules::product::dtos::ProductFilter;
use crate::modules::product::entities::{product, product_photo};
use crate::modules::product::repository::{ProductPhotoRepository, ProductRepository};
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::{now, InMemoryRepository, SeaOrmRepository};

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresProductRepository = SeaOrmRepository<product::Entity>;
pub type PostgresProductPhotoRepository = SeaOrmRepository<product_photo::Entity>;

/// Single SELECT over `produk`; price bounds are inclusive.
fn filtered_query(filter: &ProductFilter) -> Select<product::Entity> {
    let mut query = product::Entity::find();

    if let Some(name) = &filter.nama_produk {
        let pattern = contains_pattern(name);
        query = query.filter(product::Column::NamaProduk.like(pattern.as_str()));
    }
    if let Some(id) = filter.category_id {
        query = query.filter(product::Column::IdCategory.eq(id));
    }
    if let Some(id) = filter.toko_id {
        query = query.filter(product::Column::IdToko.eq(id));
    }
    if let Some(min) = filter.min_harga {
        query = query.filter(product::Column::HargaKonsumen.gte(min));
    }
    if let Some(max) = filter.max_harga {
        query = query.filter(product::Column::HargaKonsumen.lte(max));
    }

    query.order_by_asc(product::Column::Id)
}

/// `%name%` with LIKE wildcards in `name` matched literally (backslash is the default escape).
fn contains_pattern(name: &str) -> String {
    let mut pattern = String::with_capacity(name.len() + 2);
    pattern.push('%');
    for c in name.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self, filter: &ProductFilter) -> AppResult<Vec<product::Model>> {
        filtered_query(filter)
            .all(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<product::Model>> {
        product::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn create(&self, mut product: product::ActiveModel) -> AppResult<product::Model> {
        let ts = now();
        product.created_at = Set(ts);
        product.updated_at = Set(ts);
        product.insert(self.db()).await.map_err(AppError::DbError)
    }

    async fn update(&self, mut product: product::ActiveModel) -> AppResult<product::Model> {
        product.updated_at = Set(now());
        product.update(self.db()).await.map_err(AppError::DbError)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        product::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(())
    }
}

#[async_trait]
impl ProductPhotoRepository for PostgresProductPhotoRepository {
    async fn find_by_product_id(&self, id_produk: i32) -> AppResult<Vec<product_photo::Model>> {
        product_photo::Entity::find()
            .filter(product_photo::Column::IdProduk.eq(id_produk))
            .order_by_asc(product_photo::Column::Id)
            .all(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn create(&self, id_produk: i32, url: String) -> AppResult<product_photo::Model> {
        let ts = now();
        product_photo::ActiveModel {
            id_produk: Set(id_produk),
            url: Set(url),
            created_at: Set(ts),
            updated_at: Set(ts),
            ..Default::default()
        }
        .insert(self.db())
        .await
        .map_err(AppError::DbError)
    }

    async fn delete_by_product_id(&self, id_produk: i32) -> AppResult<()> {
        product_photo::Entity::delete_many()
            .filter(product_photo::Column::IdProduk.eq(id_produk))
            .exec(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(())
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

pub type InMemoryProductRepository = InMemoryRepository<product::Entity>;
pub type InMemoryProductPhotoRepository = InMemoryRepository<product_photo::Entity>;

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self, filter: &ProductFilter) -> AppResult<Vec<product::Model>> {
        let tables = self.db.lock()?;
        Ok(tables
            .product
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<product::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.product.get(&id).cloned())
    }

    async fn create(&self, mut product: product::ActiveModel) -> AppResult<product::Model> {
        let mut tables = self.db.lock()?;
        let ts = now();
        product.id = Set(tables.next_id("produk"));
        product.created_at = Set(ts);
        product.updated_at = Set(ts);
        let model = product.try_into_model()?;

        tables.product.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut product: product::ActiveModel) -> AppResult<product::Model> {
        let mut tables = self.db.lock()?;
        product.updated_at = Set(now());
        let model = product.try_into_model()?;

        match tables.product.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(model)
            }
            None => Err(AppError::NotFound("product not found".to_string())),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.db.lock()?;
        tables.product.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ProductPhotoRepository for InMemoryProductPhotoRepository {
    async fn find_by_product_id(&self, id_produk: i32) -> AppResult<Vec<product_photo::Model>> {
        let tables = self.db.lock()?;
        Ok(tables
            .product_photo
            .values()
            .filter(|p| p.id_produk == id_produk)
            .cloned()
            .collect())
    }

    async fn create(&self, id_produk: i32, url: String) -> AppResult<product_photo::Model> {
        let mut tables = self.db.lock()?;
        let ts = now();
        let model = product_photo::Model {
            id: tables.next_id("foto_produk"),
            id_produk,
            url,
            created_at: ts,
            updated_at: ts,
        };

        tables.product_photo.insert(model.id, model.clone());
        Ok(model)
    }

    async fn delete_by_product_id(&self, id_produk: i32) -> AppResult<()> {
        let mut tables = self.db.lock()?;
        tables.product_photo.retain(|_, p| p.id_produk != id_produk);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infra::repository::InMemoryDatabase;
    use std::sync::Arc;

    fn product_model(id: i32, harga: i64) -> product::Model {
        let ts = now();
        product::Model {
            id,
            id_toko: 1,
            id_category: 1,
            nama_produk: format!("Produk {}", id),
            slug: format!("produk-{}", id),
            harga_reseller: harga - 100,
            harga_konsumen: harga,
            stok: 10,
            deskripsi: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn postgres_filter_builds_single_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_model(2, 1500)]])
            .into_connection();
        let repo = PostgresProductRepository::new(Arc::new(db));
        let filter = ProductFilter {
            toko_id: Some(1),
            min_harga: Some(1000),
            max_harga: Some(2000),
            ..Default::default()
        };

        let rows = repo.find_all(&filter).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].harga_konsumen, 1500);
    }

    #[test]
    fn postgres_filter_bounds_price_inclusively() {
        let filter = ProductFilter {
            toko_id: Some(1),
            min_harga: Some(1000),
            max_harga: Some(2000),
            ..Default::default()
        };

        let sql = filtered_query(&filter)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""produk"."id_toko" = 1"#), "{}", sql);
        assert!(sql.contains(r#""produk"."harga_konsumen" >= 1000"#), "{}", sql);
        assert!(sql.contains(r#""produk"."harga_konsumen" <= 2000"#), "{}", sql);
        assert!(!sql.contains("LIKE"), "{}", sql);
    }

    #[test]
    fn name_filter_matches_wildcards_literally() {
        assert_eq!(contains_pattern("gula"), "%gula%");
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");

        let filter = ProductFilter {
            nama_produk: Some("100%".to_string()),
            ..Default::default()
        };
        let sql = filtered_query(&filter)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""produk"."nama_produk" LIKE"#), "{}", sql);
    }

    #[tokio::test]
    async fn in_memory_filter_keeps_products_on_both_price_bounds() {
        let repo = InMemoryProductRepository::new(InMemoryDatabase::new());
        {
            let mut tables = repo.db.lock().unwrap();
            for (id, harga) in [(1, 999), (2, 1000), (3, 1500), (4, 2000), (5, 2001)] {
                tables.product.insert(id, product_model(id, harga));
            }
        }
        let filter = ProductFilter {
            min_harga: Some(1000),
            max_harga: Some(2000),
            ..Default::default()
        };

        let ids: Vec<i32> = repo
            .find_all(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn in_memory_delete_by_product_id_keeps_other_photos() {
        let db = InMemoryDatabase::new();
        let repo = InMemoryProductPhotoRepository::new(db);
        repo.create(1, "a.png".to_string()).await.unwrap();
        repo.create(1, "b.png".to_string()).await.unwrap();
        repo.create(2, "c.png".to_string()).await.unwrap();

        repo.delete_by_product_id(1).await.unwrap();

        assert!(repo.find_by_product_id(1).await.unwrap().is_empty());
        assert_eq!(repo.find_by_product_id(2).await.unwrap().len(), 1);
    }
}
