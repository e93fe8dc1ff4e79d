// src/application/dto/dashboard.rs
use crate::application::dto::{ProjectDto, StatPointDto, TeamBadgeDto};
use crate::application::effects::EffectPlan;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard view model, tagged by the variant that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum DashboardDto {
    Current(CurrentDashboardDto),
    Legacy(LegacyDashboardDto),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrentDashboardDto {
    pub organization: String,
    pub organization_name: String,
    pub show_project_nav: bool,
    pub stats_period: String,
    pub sections: Vec<TeamSectionDto>,
    pub teamless_projects: Vec<ProjectCardDto>,
    /// Present only when no team owns a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyStateDto>,
    pub effects: EffectPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamSectionDto {
    pub slug: String,
    pub title: String,
    pub show_border: bool,
    pub badge: Option<TeamBadgeDto>,
    pub projects: Vec<ProjectCardDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectCardDto {
    pub project: ProjectDto,
    pub stats: Option<Vec<StatPointDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmptyStateDto {
    pub organization: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LegacyDashboardDto {
    pub organization: String,
    pub organization_name: String,
    pub teams: Vec<TeamBadgeDto>,
    pub projects: Vec<ProjectDto>,
}
