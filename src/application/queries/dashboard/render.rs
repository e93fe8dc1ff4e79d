use std::collections::HashMap;

use super::{DashboardInput, DashboardQueryService, view_for};
use crate::application::{
    dto::{BadgeOptions, DashboardDto},
    error::ApplicationResult,
    queries::common::{load_organization, resolve_stats_period},
};

pub struct RenderDashboardQuery {
    pub organization: String,
    pub stats_period: Option<String>,
}

impl DashboardQueryService {
    /// Fetch what the organization's dashboard variant needs and render it.
    pub async fn render_dashboard(
        &self,
        query: RenderDashboardQuery,
    ) -> ApplicationResult<DashboardDto> {
        let period = resolve_stats_period(query.stats_period.as_deref(), self.default_period)?;
        let organization = load_organization(self.org_repo.as_ref(), query.organization).await?;

        let variant = organization.dashboard_variant();
        let view = view_for(variant);

        let teams = self
            .team_repo
            .list_by_organization(&organization.slug)
            .await?;
        let projects = self
            .project_repo
            .list_by_organization(&organization.slug)
            .await?;
        let stats = if view.needs_stats() {
            self.stats_repo
                .stats_for_organization(&organization.slug, period)
                .await?
        } else {
            HashMap::new()
        };

        tracing::info!(
            org = %organization.slug,
            variant = variant.as_str(),
            teams = teams.len(),
            projects = projects.len(),
            "rendering dashboard"
        );

        Ok(view.render(&DashboardInput {
            organization: &organization,
            teams: &teams,
            projects: &projects,
            stats: &stats,
            stats_period: period,
            badge: BadgeOptions::default(),
        }))
    }
}
