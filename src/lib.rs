pub mod api;
pub mod catalog;
pub mod common;
pub mod models;
