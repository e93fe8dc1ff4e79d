use crate::domain::errors::DomainResult;
use crate::domain::organization::OrganizationSlug;
use crate::domain::project::entity::Project;
use crate::domain::project::stats::{ProjectStats, StatsPeriod};
use crate::domain::project::value_objects::ProjectId;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_by_organization(&self, org: &OrganizationSlug) -> DomainResult<Vec<Project>>;
}

#[async_trait]
pub trait ProjectStatsRepository: Send + Sync {
    /// Event series per project for the requested period. Projects without
    /// recorded data may be absent from the map.
    async fn stats_for_organization(
        &self,
        org: &OrganizationSlug,
        period: StatsPeriod,
    ) -> DomainResult<HashMap<ProjectId, ProjectStats>>;
}
