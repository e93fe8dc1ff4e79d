pub mod fixtures;
pub mod repositories;
pub mod time;
pub mod ui_state;
pub mod util;
