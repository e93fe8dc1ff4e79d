use crate::domain::project::{Project, ProjectStats, StatPoint};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub teams: Vec<String>,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.as_str().to_string(),
            slug: project.slug.as_str().to_string(),
            name: project.name.as_str().to_string(),
            platform: project.platform.clone(),
            teams: project
                .teams
                .iter()
                .map(|team| team.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatPointDto {
    /// Unix seconds at the start of the bucket.
    pub timestamp: i64,
    pub count: u64,
}

impl From<&StatPoint> for StatPointDto {
    fn from(point: &StatPoint) -> Self {
        Self {
            timestamp: point.timestamp.timestamp(),
            count: point.count,
        }
    }
}

pub fn stats_to_dto(stats: &ProjectStats) -> Vec<StatPointDto> {
    stats.points.iter().map(StatPointDto::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProjectWithStatsDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    /// `null` when the stats source has nothing for this project.
    pub stats: Option<Vec<StatPointDto>>,
}
