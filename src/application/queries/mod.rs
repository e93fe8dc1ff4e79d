mod common;

pub mod dashboard;
pub mod projects;
pub mod teams;
