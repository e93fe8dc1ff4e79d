use crate::domain::errors::DomainResult;
use crate::domain::organization::OrganizationSlug;
use crate::domain::team::entity::Team;
use async_trait::async_trait;

#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn list_by_organization(&self, org: &OrganizationSlug) -> DomainResult<Vec<Team>>;
}
