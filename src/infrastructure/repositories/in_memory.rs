// src/infrastructure/repositories/in_memory.rs
use crate::application::ports::{ClockPort, SlugGeneratorPort};
use crate::domain::{
    errors::DomainResult,
    organization::{Organization, OrganizationRepository, OrganizationSlug},
    project::{
        Project, ProjectId, ProjectRepository, ProjectStats, ProjectStatsRepository, StatsPeriod,
    },
    team::{Team, TeamRepository},
};
use crate::infrastructure::fixtures::{FixtureFile, ensure_unique};
use crate::infrastructure::repositories::error::{map_io, map_json};
use async_trait::async_trait;
use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
    sync::Arc,
};

struct OrganizationData {
    organization: Organization,
    teams: Vec<Team>,
    projects: Vec<Project>,
    hourly_events: HashMap<ProjectId, Vec<u64>>,
}

/// Read-only data source seeded once at startup. Implements every read
/// repository the application layer needs.
pub struct InMemoryStore {
    organizations: BTreeMap<OrganizationSlug, OrganizationData>,
    clock: Arc<ClockPort>,
}

impl InMemoryStore {
    pub fn empty(clock: Arc<ClockPort>) -> Self {
        Self {
            organizations: BTreeMap::new(),
            clock,
        }
    }

    pub fn load(
        path: &Path,
        slugger: &SlugGeneratorPort,
        clock: Arc<ClockPort>,
    ) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| map_io(path, err))?;
        let store = Self::from_json_str(&raw, slugger, clock)?;
        tracing::info!(
            path = %path.display(),
            organizations = store.organizations.len(),
            "loaded fixtures"
        );
        Ok(store)
    }

    pub fn from_json_str(
        raw: &str,
        slugger: &SlugGeneratorPort,
        clock: Arc<ClockPort>,
    ) -> DomainResult<Self> {
        let fixture: FixtureFile = serde_json::from_str(raw).map_err(map_json)?;
        Self::from_fixture(fixture, slugger, clock)
    }

    pub fn from_fixture(
        fixture: FixtureFile,
        slugger: &SlugGeneratorPort,
        clock: Arc<ClockPort>,
    ) -> DomainResult<Self> {
        let mut organizations = BTreeMap::new();

        for record in fixture.organizations {
            let organization = record.to_organization()?;
            let teams = record
                .teams
                .iter()
                .map(|team| team.to_team(slugger))
                .collect::<DomainResult<Vec<_>>>()?;
            let projects = record
                .projects
                .iter()
                .map(|project| project.to_project())
                .collect::<DomainResult<Vec<_>>>()?;

            ensure_unique(
                "team slug",
                &organization.slug,
                teams.iter().map(|team| team.slug.as_str()),
            )?;
            ensure_unique(
                "project id",
                &organization.slug,
                projects.iter().map(|project| project.id.as_str()),
            )?;

            let hourly_events = projects
                .iter()
                .zip(&record.projects)
                .filter_map(|(project, raw)| {
                    raw.hourly_events
                        .clone()
                        .map(|events| (project.id.clone(), events))
                })
                .collect();

            organizations.insert(
                organization.slug.clone(),
                OrganizationData {
                    organization,
                    teams,
                    projects,
                    hourly_events,
                },
            );
        }

        Ok(Self {
            organizations,
            clock,
        })
    }

    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryStore {
    async fn find_by_slug(&self, slug: &OrganizationSlug) -> DomainResult<Option<Organization>> {
        Ok(self
            .organizations
            .get(slug)
            .map(|data| data.organization.clone()))
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn list_by_organization(&self, org: &OrganizationSlug) -> DomainResult<Vec<Team>> {
        Ok(self
            .organizations
            .get(org)
            .map(|data| data.teams.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_by_organization(&self, org: &OrganizationSlug) -> DomainResult<Vec<Project>> {
        Ok(self
            .organizations
            .get(org)
            .map(|data| data.projects.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ProjectStatsRepository for InMemoryStore {
    async fn stats_for_organization(
        &self,
        org: &OrganizationSlug,
        period: StatsPeriod,
    ) -> DomainResult<HashMap<ProjectId, ProjectStats>> {
        let Some(data) = self.organizations.get(org) else {
            return Ok(HashMap::new());
        };
        let now = self.clock.now();

        Ok(data
            .hourly_events
            .iter()
            .map(|(id, hourly)| (id.clone(), ProjectStats::from_hourly(hourly, now, period)))
            .collect())
    }
}
