pub mod entity;
pub mod repository;
pub mod stats;
pub mod value_objects;

pub use entity::Project;
pub use repository::{ProjectRepository, ProjectStatsRepository};
pub use stats::{ProjectStats, StatPoint, StatsPeriod};
pub use value_objects::{ProjectId, ProjectName, ProjectSlug};
