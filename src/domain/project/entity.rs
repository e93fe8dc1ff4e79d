// src/domain/project/entity.rs
use crate::domain::project::value_objects::{ProjectId, ProjectName, ProjectSlug};
use crate::domain::team::TeamSlug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub slug: ProjectSlug,
    pub name: ProjectName,
    pub platform: Option<String>,
    /// Team slugs as delivered by the data source. May repeat or name teams
    /// that do not exist; grouping resolves both.
    pub teams: Vec<TeamSlug>,
}

impl Project {
    /// Convert raw team references into slugs. Null or blank references are
    /// treated as "no reference" and dropped.
    pub fn team_refs_from_raw<I, S>(raw: I) -> Vec<TeamSlug>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        raw.into_iter()
            .flatten()
            .filter_map(|value| match TeamSlug::new(value) {
                Ok(slug) => Some(slug),
                Err(err) => {
                    tracing::debug!(error = %err, "dropping unusable team reference");
                    None
                }
            })
            .collect()
    }

    pub fn references_team(&self, slug: &str) -> bool {
        self.teams.iter().any(|team| team.as_str() == slug)
    }
}
