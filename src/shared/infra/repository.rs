use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::modules::category::entities::category;
use crate::modules::product::entities::{product, product_photo};
use crate::modules::toko::entities::toko;
use crate::modules::trx::entities::{detail_trx, trx};
use crate::modules::users::entities::{alamat, user};
use crate::shared::error::{AppError, AppResult};

// =========================================================================
// SeaORM Implementation (Generic Base)
// =========================================================================

#[derive(Clone)]
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub conn: Arc<DatabaseConnection>,
    _marker: std::marker::PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        tracing::debug!("Creating SeaOrmRepository for {}", std::any::type_name::<E>());
        Self {
            conn: db,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.conn.as_ref()
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

/// Every table of the schema, held in process memory.
#[derive(Default)]
pub struct Tables {
    pub users: BTreeMap<i32, user::Model>,
    pub alamat: BTreeMap<i32, alamat::Model>,
    pub toko: BTreeMap<i32, toko::Model>,
    pub category: BTreeMap<i32, category::Model>,
    pub product: BTreeMap<i32, product::Model>,
    pub product_photo: BTreeMap<i32, product_photo::Model>,
    pub trx: BTreeMap<i32, trx::Model>,
    pub detail_trx: BTreeMap<i32, detail_trx::Model>,
    sequences: HashMap<&'static str, i32>,
}

impl Tables {
    /// Auto-increment counter per table, starting at 1.
    pub fn next_id(&mut self, table: &'static str) -> i32 {
        let counter = self.sequences.entry(table).or_insert(0);
        *counter += 1;
        *counter
    }
}

/// Shared handle; every in-memory repository built from the same handle sees the same rows.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::InternalServerError("in-memory store poisoned".to_string()))
    }
}

#[derive(Clone)]
pub struct InMemoryRepository<E>
where
    E: EntityTrait,
{
    pub db: InMemoryDatabase,
    _marker: std::marker::PhantomData<E>,
}

impl<E> InMemoryRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: InMemoryDatabase) -> Self {
        Self {
            db,
            _marker: std::marker::PhantomData,
        }
    }
}

pub fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
