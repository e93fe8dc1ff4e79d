mod list;
mod service;

pub use list::ListProjectsQuery;
pub use service::ProjectQueryService;
