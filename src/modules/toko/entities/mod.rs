pub mod toko;
