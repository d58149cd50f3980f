// src/core/mod.rs — Core domain types

pub mod types;
