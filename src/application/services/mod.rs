// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::{
        dashboard::DashboardQueryService, projects::ProjectQueryService, teams::TeamQueryService,
    },
    domain::{
        organization::OrganizationRepository,
        project::{ProjectRepository, ProjectStatsRepository, StatsPeriod},
        team::TeamRepository,
    },
};

pub struct ApplicationServices {
    pub team_queries: Arc<TeamQueryService>,
    pub project_queries: Arc<ProjectQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
}

impl ApplicationServices {
    pub fn new(
        org_repo: Arc<dyn OrganizationRepository>,
        team_repo: Arc<dyn TeamRepository>,
        project_repo: Arc<dyn ProjectRepository>,
        stats_repo: Arc<dyn ProjectStatsRepository>,
        default_period: StatsPeriod,
    ) -> Self {
        let team_queries = Arc::new(TeamQueryService::new(
            Arc::clone(&org_repo),
            Arc::clone(&team_repo),
        ));

        let project_queries = Arc::new(ProjectQueryService::new(
            Arc::clone(&org_repo),
            Arc::clone(&project_repo),
            Arc::clone(&stats_repo),
            default_period,
        ));

        let dashboard_queries = Arc::new(DashboardQueryService::new(
            Arc::clone(&org_repo),
            Arc::clone(&team_repo),
            Arc::clone(&project_repo),
            Arc::clone(&stats_repo),
            default_period,
        ));

        Self {
            team_queries,
            project_queries,
            dashboard_queries,
        }
    }
}
