pub mod config;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod repository;
pub mod response;
pub mod state;
pub mod upload;
