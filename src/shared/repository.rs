use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::modules::category::{
    infra::persistence::{InMemoryCategoryRepository, PostgresCategoryRepository},
    repository::CategoryRepository,
};
use crate::modules::product::{
    infra::persistence::{
        InMemoryProductPhotoRepository, InMemoryProductRepository, PostgresProductPhotoRepository,
        PostgresProductRepository,
    },
    repository::{ProductPhotoRepository, ProductRepository},
};
use crate::modules::toko::{
    infra::persistence::{InMemoryTokoRepository, PostgresTokoRepository},
    repository::TokoRepository,
};
use crate::modules::trx::{
    infra::persistence::{InMemoryTrxRepository, PostgresTrxRepository},
    repository::TrxRepository,
};
use crate::modules::users::{
    infra::persistence::{
        InMemoryAlamatRepository, InMemoryUserRepository, PostgresAlamatRepository,
        PostgresUserRepository,
    },
    repository::{AlamatRepository, UserRepository},
};
use crate::shared::infra::repository::InMemoryDatabase;

/// One handle per repository trait, all backed by the same store.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub alamat: Arc<dyn AlamatRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tokos: Arc<dyn TokoRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub product_photos: Arc<dyn ProductPhotoRepository>,
    pub trxs: Arc<dyn TrxRepository>,
}

impl Repositories {
    pub fn sea_orm(db: Arc<DatabaseConnection>) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            alamat: Arc::new(PostgresAlamatRepository::new(db.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(db.clone())),
            tokos: Arc::new(PostgresTokoRepository::new(db.clone())),
            products: Arc::new(PostgresProductRepository::new(db.clone())),
            product_photos: Arc::new(PostgresProductPhotoRepository::new(db.clone())),
            trxs: Arc::new(PostgresTrxRepository::new(db)),
        }
    }

    pub fn in_memory(db: InMemoryDatabase) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new(db.clone())),
            alamat: Arc::new(InMemoryAlamatRepository::new(db.clone())),
            categories: Arc::new(InMemoryCategoryRepository::new(db.clone())),
            tokos: Arc::new(InMemoryTokoRepository::new(db.clone())),
            products: Arc::new(InMemoryProductRepository::new(db.clone())),
            product_photos: Arc::new(InMemoryProductPhotoRepository::new(db.clone())),
            trxs: Arc::new(InMemoryTrxRepository::new(db)),
        }
    }
}
