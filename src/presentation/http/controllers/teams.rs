// src/presentation/http/controllers/teams.rs
use crate::application::{dto::TeamDto, queries::teams::ListTeamsQuery};
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
pub struct TeamListParams {
    /// Badge avatar size in pixels (1-256, default 24).
    #[serde(default)]
    pub avatar_size: Option<u32>,
    #[serde(default)]
    pub hide_avatar: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{org}/teams",
    params(
        ("org" = String, Path, description = "Organization slug"),
        TeamListParams
    ),
    responses(
        (status = 200, description = "Teams with badge data.", body = [TeamDto]),
        (status = 400, description = "Invalid badge options.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown organization.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn list_teams(
    Extension(state): Extension<HttpState>,
    Path(org): Path<String>,
    ApiQuery(params): ApiQuery<TeamListParams>,
) -> HttpResult<Json<Vec<TeamDto>>> {
    state
        .services
        .team_queries
        .list_teams(ListTeamsQuery {
            organization: org,
            avatar_size: params.avatar_size,
            hide_avatar: params.hide_avatar,
        })
        .await
        .into_http()
        .map(Json)
}
