use crate::domain::errors::DomainResult;
use crate::domain::organization::entity::Organization;
use crate::domain::organization::value_objects::OrganizationSlug;
use async_trait::async_trait;

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &OrganizationSlug) -> DomainResult<Option<Organization>>;
}
