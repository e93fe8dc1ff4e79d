// src/presentation/http/controllers/mod.rs
pub mod dashboard;
pub mod projects;
pub mod teams;
