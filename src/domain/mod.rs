// src/domain/mod.rs
pub mod errors;
pub mod grouping;
pub mod organization;
pub mod project;
pub mod team;
