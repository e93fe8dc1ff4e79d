use std::sync::Arc;

use crate::domain::{
    organization::OrganizationRepository,
    project::{ProjectRepository, ProjectStatsRepository, StatsPeriod},
};

pub struct ProjectQueryService {
    pub(super) org_repo: Arc<dyn OrganizationRepository>,
    pub(super) project_repo: Arc<dyn ProjectRepository>,
    pub(super) stats_repo: Arc<dyn ProjectStatsRepository>,
    pub(super) default_period: StatsPeriod,
}

impl ProjectQueryService {
    pub fn new(
        org_repo: Arc<dyn OrganizationRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        stats_repo: Arc<dyn ProjectStatsRepository>,
        default_period: StatsPeriod,
    ) -> Self {
        Self {
            org_repo,
            project_repo,
            stats_repo,
            default_period,
        }
    }
}
