pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Team;
pub use repository::TeamRepository;
pub use value_objects::{TeamId, TeamName, TeamSlug};
