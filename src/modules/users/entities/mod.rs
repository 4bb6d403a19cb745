pub mod alamat;
pub mod user;
