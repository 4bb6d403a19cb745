pub mod auth;
pub mod category;
pub mod product;
pub mod toko;
pub mod trx;
pub mod users;
