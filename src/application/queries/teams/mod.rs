mod list;
mod service;

pub use list::ListTeamsQuery;
pub use service::TeamQueryService;
