// src/presentation/http/controllers/projects.rs
use crate::application::{dto::ProjectWithStatsDto, queries::projects::ListProjectsQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StatsParams {
    /// Window such as `24h` or `14d`.
    #[serde(default)]
    pub stats_period: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{org}/projects",
    params(
        ("org" = String, Path, description = "Organization slug"),
        StatsParams
    ),
    responses(
        (status = 200, description = "Projects with hourly event series.", body = [ProjectWithStatsDto]),
        (status = 400, description = "Invalid stats period.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown organization.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    Extension(state): Extension<HttpState>,
    Path(org): Path<String>,
    ApiQuery(params): ApiQuery<StatsParams>,
) -> HttpResult<Json<Vec<ProjectWithStatsDto>>> {
    state
        .services
        .project_queries
        .list_projects_with_stats(ListProjectsQuery {
            organization: org,
            stats_period: params.stats_period,
        })
        .await
        .into_http()
        .map(Json)
}
