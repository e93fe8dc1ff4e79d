// src/application/queries/dashboard/view.rs
//! The two dashboard renderings. Both are pure: they only read the data
//! handed to them and never touch global state.

use std::collections::HashMap;

use crate::{
    application::{
        dto::{
            BadgeOptions, CurrentDashboardDto, DashboardDto, EmptyStateDto, LegacyDashboardDto,
            ProjectCardDto, ProjectDto, TeamBadgeDto, TeamSectionDto, projects::stats_to_dto,
        },
        effects::EffectPlan,
    },
    domain::{
        grouping::group_projects_by_team,
        organization::{DashboardVariant, Organization},
        project::{Project, ProjectId, ProjectStats, StatsPeriod},
        team::Team,
    },
};

/// Everything a dashboard needs, already fetched.
pub struct DashboardInput<'a> {
    pub organization: &'a Organization,
    pub teams: &'a [Team],
    pub projects: &'a [Project],
    pub stats: &'a HashMap<ProjectId, ProjectStats>,
    pub stats_period: StatsPeriod,
    pub badge: BadgeOptions,
}

pub trait DashboardView: Send + Sync {
    fn variant(&self) -> DashboardVariant;

    /// Whether the caller should fetch project statistics before rendering.
    fn needs_stats(&self) -> bool;

    fn render(&self, input: &DashboardInput<'_>) -> DashboardDto;
}

pub fn view_for(variant: DashboardVariant) -> &'static dyn DashboardView {
    match variant {
        DashboardVariant::Current => &CurrentDashboard,
        DashboardVariant::Legacy => &LegacyDashboard,
    }
}

/// Project cards grouped into one section per team.
pub struct CurrentDashboard;

impl CurrentDashboard {
    fn card(project: &Project, stats: &HashMap<ProjectId, ProjectStats>) -> ProjectCardDto {
        ProjectCardDto {
            project: ProjectDto::from(project),
            stats: stats.get(&project.id).map(stats_to_dto),
        }
    }
}

impl DashboardView for CurrentDashboard {
    fn variant(&self) -> DashboardVariant {
        DashboardVariant::Current
    }

    fn needs_stats(&self) -> bool {
        true
    }

    fn render(&self, input: &DashboardInput<'_>) -> DashboardDto {
        let grouped = group_projects_by_team(input.teams, input.projects);
        let teams: HashMap<&str, &Team> = input
            .teams
            .iter()
            .map(|team| (team.slug.as_str(), team))
            .collect();

        let last = grouped.len().saturating_sub(1);
        let sections = grouped
            .iter()
            .enumerate()
            .map(|(index, (slug, projects))| TeamSectionDto {
                slug: slug.to_string(),
                title: format!("#{slug}"),
                show_border: index != last,
                badge: teams
                    .get(slug)
                    .map(|team| TeamBadgeDto::new(team, input.badge)),
                projects: projects
                    .iter()
                    .map(|project| Self::card(project, input.stats))
                    .collect(),
            })
            .collect();

        let teamless_projects = grouped
            .teamless()
            .iter()
            .map(|project| Self::card(project, input.stats))
            .collect();

        let empty_state = grouped.is_empty().then(|| EmptyStateDto {
            organization: input.organization.slug.to_string(),
        });

        DashboardDto::Current(CurrentDashboardDto {
            organization: input.organization.slug.to_string(),
            organization_name: input.organization.name.clone(),
            show_project_nav: true,
            stats_period: input.stats_period.to_string(),
            sections,
            teamless_projects,
            empty_state,
            effects: EffectPlan::for_variant(self.variant()),
        })
    }
}

/// Flat listing shown to organizations without the new dashboard.
pub struct LegacyDashboard;

impl DashboardView for LegacyDashboard {
    fn variant(&self) -> DashboardVariant {
        DashboardVariant::Legacy
    }

    fn needs_stats(&self) -> bool {
        false
    }

    fn render(&self, input: &DashboardInput<'_>) -> DashboardDto {
        DashboardDto::Legacy(LegacyDashboardDto {
            organization: input.organization.slug.to_string(),
            organization_name: input.organization.name.clone(),
            teams: input
                .teams
                .iter()
                .map(|team| TeamBadgeDto::new(team, input.badge))
                .collect(),
            projects: input.projects.iter().map(ProjectDto::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::effects::DASHBOARD_BODY_CLASS;
    use crate::domain::organization::{FeatureSet, OrganizationSlug};
    use crate::domain::project::{ProjectName, ProjectSlug, StatPoint};
    use crate::domain::team::{TeamId, TeamName, TeamSlug};
    use chrono::{TimeZone, Utc};

    fn organization(features: &[&str]) -> Organization {
        Organization {
            slug: OrganizationSlug::new("acme").unwrap(),
            name: "Acme".into(),
            features: features.iter().copied().collect::<FeatureSet>(),
        }
    }

    fn team(slug: &str) -> Team {
        Team {
            id: TeamId::new(slug).unwrap(),
            slug: TeamSlug::new(slug).unwrap(),
            name: TeamName::new(slug).unwrap(),
        }
    }

    fn project(id: &str, teams: &[&str]) -> Project {
        Project {
            id: ProjectId::new(id).unwrap(),
            slug: ProjectSlug::new(format!("p{id}")).unwrap(),
            name: ProjectName::new(format!("P{id}")).unwrap(),
            platform: Some("rust".into()),
            teams: teams.iter().map(|slug| TeamSlug::new(*slug).unwrap()).collect(),
        }
    }

    fn render(
        view: &dyn DashboardView,
        org: &Organization,
        teams: &[Team],
        projects: &[Project],
        stats: &HashMap<ProjectId, ProjectStats>,
    ) -> DashboardDto {
        view.render(&DashboardInput {
            organization: org,
            teams,
            projects,
            stats,
            stats_period: StatsPeriod::default(),
            badge: BadgeOptions::default(),
        })
    }

    #[test]
    fn view_for_matches_variant() {
        assert_eq!(view_for(DashboardVariant::Current).variant(), DashboardVariant::Current);
        assert_eq!(view_for(DashboardVariant::Legacy).variant(), DashboardVariant::Legacy);
        assert!(view_for(DashboardVariant::Current).needs_stats());
        assert!(!view_for(DashboardVariant::Legacy).needs_stats());
    }

    #[test]
    fn current_dashboard_renders_sections_with_borders() {
        let org = organization(&["dashboard"]);
        let teams = vec![team("alpha"), team("beta")];
        let projects = vec![project("1", &["alpha"]), project("2", &["beta", "alpha"])];
        let mut stats = HashMap::new();
        stats.insert(
            ProjectId::new("1").unwrap(),
            ProjectStats {
                points: vec![StatPoint {
                    timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    count: 9,
                }],
            },
        );

        let DashboardDto::Current(dashboard) =
            render(&CurrentDashboard, &org, &teams, &projects, &stats)
        else {
            panic!("expected current dashboard");
        };

        assert_eq!(dashboard.sections.len(), 2);
        let alpha = &dashboard.sections[0];
        assert_eq!(alpha.title, "#alpha");
        assert!(alpha.show_border);
        assert_eq!(alpha.badge.as_ref().map(|b| b.display_name.as_str()), Some("#alpha"));
        let ids: Vec<&str> = alpha.projects.iter().map(|c| c.project.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(alpha.projects[0].stats.as_ref().map(Vec::len), Some(1));
        assert!(alpha.projects[1].stats.is_none());

        let beta = &dashboard.sections[1];
        assert!(!beta.show_border);
        assert!(dashboard.empty_state.is_none());
        assert!(dashboard.show_project_nav);
        assert_eq!(dashboard.organization_name, "Acme");
        assert_eq!(dashboard.stats_period, "24h");
        assert_eq!(
            dashboard.effects,
            EffectPlan::body_class(DASHBOARD_BODY_CLASS)
        );
    }

    #[test]
    fn current_dashboard_shows_empty_state_without_owned_projects() {
        let org = organization(&["dashboard"]);
        let projects = vec![project("1", &[]), project("2", &["ghost"])];

        let DashboardDto::Current(dashboard) =
            render(&CurrentDashboard, &org, &[team("alpha")], &projects, &HashMap::new())
        else {
            panic!("expected current dashboard");
        };

        assert!(dashboard.sections.is_empty());
        assert_eq!(
            dashboard.empty_state,
            Some(EmptyStateDto {
                organization: "acme".into()
            })
        );
        assert_eq!(dashboard.teamless_projects.len(), 2);
    }

    #[test]
    fn legacy_dashboard_lists_everything_flat() {
        let org = organization(&[]);
        let teams = vec![team("beta"), team("alpha")];
        let projects = vec![project("2", &[]), project("1", &["alpha"])];

        let DashboardDto::Legacy(dashboard) =
            render(&LegacyDashboard, &org, &teams, &projects, &HashMap::new())
        else {
            panic!("expected legacy dashboard");
        };

        assert_eq!(dashboard.organization_name, "Acme");
        let team_names: Vec<&str> = dashboard.teams.iter().map(|t| t.display_name.as_str()).collect();
        assert_eq!(team_names, vec!["#beta", "#alpha"]);
        let ids: Vec<&str> = dashboard.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
