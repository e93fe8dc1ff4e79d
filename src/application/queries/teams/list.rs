use super::TeamQueryService;
use crate::application::{
    dto::{BadgeOptions, TeamDto},
    error::ApplicationResult,
    queries::common::load_organization,
};

pub struct ListTeamsQuery {
    pub organization: String,
    pub avatar_size: Option<u32>,
    pub hide_avatar: Option<bool>,
}

impl TeamQueryService {
    pub async fn list_teams(&self, query: ListTeamsQuery) -> ApplicationResult<Vec<TeamDto>> {
        let options = BadgeOptions::new(query.avatar_size, query.hide_avatar)?;
        let organization = load_organization(self.org_repo.as_ref(), query.organization).await?;

        let teams = self
            .team_repo
            .list_by_organization(&organization.slug)
            .await?;
        tracing::debug!(org = %organization.slug, teams = teams.len(), "listed teams");

        Ok(teams.iter().map(|team| TeamDto::new(team, options)).collect())
    }
}
