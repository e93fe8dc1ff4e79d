pub mod dashboard;
pub mod projects;
pub mod teams;

pub use dashboard::{
    CurrentDashboardDto, DashboardDto, EmptyStateDto, LegacyDashboardDto, ProjectCardDto,
    TeamSectionDto,
};
pub use projects::{ProjectDto, ProjectWithStatsDto, StatPointDto};
pub use teams::{BadgeOptions, TeamBadgeDto, TeamDto};
