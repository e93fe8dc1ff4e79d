mod render;
mod service;
mod view;

pub use render::RenderDashboardQuery;
pub use service::DashboardQueryService;
pub use view::{CurrentDashboard, DashboardInput, DashboardView, LegacyDashboard, view_for};
