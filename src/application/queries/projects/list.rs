use super::ProjectQueryService;
use crate::application::{
    dto::{ProjectDto, ProjectWithStatsDto, projects::stats_to_dto},
    error::ApplicationResult,
    queries::common::{load_organization, resolve_stats_period},
};

pub struct ListProjectsQuery {
    pub organization: String,
    pub stats_period: Option<String>,
}

impl ProjectQueryService {
    /// Projects of an organization together with their event series.
    pub async fn list_projects_with_stats(
        &self,
        query: ListProjectsQuery,
    ) -> ApplicationResult<Vec<ProjectWithStatsDto>> {
        let period = resolve_stats_period(query.stats_period.as_deref(), self.default_period)?;
        let organization = load_organization(self.org_repo.as_ref(), query.organization).await?;

        let projects = self
            .project_repo
            .list_by_organization(&organization.slug)
            .await?;
        let stats = self
            .stats_repo
            .stats_for_organization(&organization.slug, period)
            .await?;

        tracing::debug!(
            org = %organization.slug,
            projects = projects.len(),
            period = %period,
            "listed projects with stats"
        );

        Ok(projects
            .iter()
            .map(|project| ProjectWithStatsDto {
                project: ProjectDto::from(project),
                stats: stats.get(&project.id).map(stats_to_dto),
            })
            .collect())
    }
}
