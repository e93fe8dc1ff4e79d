use std::sync::Arc;

use crate::domain::{
    organization::OrganizationRepository,
    project::{ProjectRepository, ProjectStatsRepository, StatsPeriod},
    team::TeamRepository,
};

pub struct DashboardQueryService {
    pub(super) org_repo: Arc<dyn OrganizationRepository>,
    pub(super) team_repo: Arc<dyn TeamRepository>,
    pub(super) project_repo: Arc<dyn ProjectRepository>,
    pub(super) stats_repo: Arc<dyn ProjectStatsRepository>,
    pub(super) default_period: StatsPeriod,
}

impl DashboardQueryService {
    pub fn new(
        org_repo: Arc<dyn OrganizationRepository>,
        team_repo: Arc<dyn TeamRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        stats_repo: Arc<dyn ProjectStatsRepository>,
        default_period: StatsPeriod,
    ) -> Self {
        Self {
            org_repo,
            team_repo,
            project_repo,
            stats_repo,
            default_period,
        }
    }
}
