// src/application/ports/mod.rs
pub mod time;
pub mod ui_state;
pub mod util;

pub type ClockPort = dyn time::Clock;
pub type DocumentStatePort = dyn ui_state::DocumentState;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
