pub mod detail_trx;
pub mod trx;
