// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory;

pub use in_memory::InMemoryStore;
