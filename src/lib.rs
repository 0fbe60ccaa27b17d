pub mod api;
pub mod canvas;
pub mod config;
pub mod error;
pub mod jex;
pub mod models;
pub mod services;
pub mod sis_csv;
pub mod state;
pub mod sync;
