// src/domain/grouping.rs
//! Grouping of projects under the teams that own them.
//!
//! The result borrows from its inputs and is meant to be recomputed whenever
//! the team or project lists change.

use crate::domain::project::Project;
use crate::domain::team::Team;
use std::collections::{BTreeMap, HashSet};

/// Projects keyed by owning team slug, plus the projects no known team owns.
///
/// Keys are exactly the slugs of teams with at least one project, iterated in
/// ascending slug order. Every sequence keeps the relative order of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsByTeam<'a> {
    by_team: BTreeMap<&'a str, Vec<&'a Project>>,
    teamless: Vec<&'a Project>,
}

impl<'a> ProjectsByTeam<'a> {
    pub fn projects_for(&self, slug: &str) -> Option<&[&'a Project]> {
        self.by_team.get(slug).map(Vec::as_slice)
    }

    pub fn team_slugs(&self) -> impl ExactSizeIterator<Item = &'a str> + '_ {
        self.by_team.keys().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'a str, &[&'a Project])> + '_ {
        self.by_team
            .iter()
            .map(|(slug, projects)| (*slug, projects.as_slice()))
    }

    pub fn teamless(&self) -> &[&'a Project] {
        &self.teamless
    }

    /// Number of teams that own at least one project.
    pub fn len(&self) -> usize {
        self.by_team.len()
    }

    /// True when no team owns any project. Teamless projects do not count.
    pub fn is_empty(&self) -> bool {
        self.by_team.is_empty()
    }
}

/// Group `projects` under the `teams` they reference.
///
/// A project listed under several teams appears once per team; a repeated
/// reference to the same team counts once. Projects whose references are all
/// unknown, or who have none, land in the teamless list exactly once.
pub fn group_projects_by_team<'a>(teams: &'a [Team], projects: &'a [Project]) -> ProjectsByTeam<'a> {
    let known: HashSet<&str> = teams.iter().map(|team| team.slug.as_str()).collect();
    let mut grouped = ProjectsByTeam::default();

    for project in projects {
        let mut placed: Vec<&str> = Vec::with_capacity(project.teams.len());

        for slug in project.teams.iter().map(|team| team.as_str()) {
            let Some(&slug) = known.get(slug) else {
                continue;
            };
            if placed.contains(&slug) {
                continue;
            }
            placed.push(slug);
            grouped.by_team.entry(slug).or_default().push(project);
        }

        if placed.is_empty() {
            grouped.teamless.push(project);
        }
    }

    grouped
}
