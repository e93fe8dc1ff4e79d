pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Organization;
pub use repository::OrganizationRepository;
pub use value_objects::{DashboardVariant, FeatureSet, OrganizationSlug};
