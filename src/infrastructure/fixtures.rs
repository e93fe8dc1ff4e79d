// src/infrastructure/fixtures.rs
//! JSON records used to seed the in-memory data source.
//!
//! Records are deliberately loose: ids may be strings or numbers, team slugs
//! may be missing (derived from the name) and project team references may be
//! `null`.

use crate::application::ports::util::SlugGenerator;
use crate::domain::{
    errors::{DomainError, DomainResult},
    organization::{FeatureSet, Organization, OrganizationSlug},
    project::{Project, ProjectId, ProjectName, ProjectSlug},
    team::{Team, TeamId, TeamName, TeamSlug},
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub organizations: Vec<OrganizationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRecord {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRecord {
    pub id: RawId,
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: RawId,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub teams: Vec<Option<String>>,
    /// Hourly event counts, oldest first.
    #[serde(default)]
    pub hourly_events: Option<Vec<u64>>,
}

impl OrganizationRecord {
    pub fn to_organization(&self) -> DomainResult<Organization> {
        let slug = OrganizationSlug::new(self.slug.clone())?;
        Ok(Organization {
            name: self.name.clone().unwrap_or_else(|| slug.to_string()),
            features: self.features.iter().map(String::as_str).collect::<FeatureSet>(),
            slug,
        })
    }
}

impl TeamRecord {
    pub fn to_team(&self, slugger: &dyn SlugGenerator) -> DomainResult<Team> {
        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugger.slugify(&self.name),
        };
        Ok(Team {
            id: TeamId::new(self.id.clone())?,
            slug: TeamSlug::new(slug)?,
            name: TeamName::new(self.name.clone())?,
        })
    }
}

impl ProjectRecord {
    pub fn to_project(&self) -> DomainResult<Project> {
        Ok(Project {
            id: ProjectId::new(self.id.clone())?,
            slug: ProjectSlug::new(self.slug.clone())?,
            name: ProjectName::new(self.name.clone().unwrap_or_else(|| self.slug.clone()))?,
            platform: self.platform.clone(),
            teams: Project::team_refs_from_raw(self.teams.iter().cloned()),
        })
    }
}

/// Reject fixtures that reuse a team slug or project id within one organization.
pub(crate) fn ensure_unique<'a>(
    kind: &str,
    org: &OrganizationSlug,
    keys: impl IntoIterator<Item = &'a str>,
) -> DomainResult<()> {
    let mut seen = std::collections::HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DomainError::Validation(format!(
                "duplicate {kind} `{key}` in organization `{org}`"
            )));
        }
    }
    Ok(())
}
