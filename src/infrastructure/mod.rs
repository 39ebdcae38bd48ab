// src/infrastructure/mod.rs
pub mod database;
pub mod repositories;
pub mod session;
pub mod time;
pub mod unit_of_work;
