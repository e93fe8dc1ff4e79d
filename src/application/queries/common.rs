// src/application/queries/common.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        organization::{Organization, OrganizationRepository, OrganizationSlug},
        project::StatsPeriod,
    },
};

pub(super) async fn load_organization(
    repo: &dyn OrganizationRepository,
    slug: String,
) -> ApplicationResult<Organization> {
    let slug = OrganizationSlug::new(slug)?;
    repo.find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::not_found(format!("organization `{slug}` not found")))
}

pub(super) fn resolve_stats_period(
    raw: Option<&str>,
    fallback: StatsPeriod,
) -> ApplicationResult<StatsPeriod> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value
            .parse::<StatsPeriod>()
            .map_err(|err| ApplicationError::validation(err.to_string())),
        None => Ok(fallback),
    }
}
