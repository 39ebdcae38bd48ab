// src/application/ports/mod.rs
pub mod time;
pub mod unit_of_work;
