// src/presentation/http/controllers/dashboard.rs
use crate::application::{dto::DashboardDto, queries::dashboard::RenderDashboardQuery};
use crate::presentation::http::controllers::projects::StatsParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiQuery;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
};

#[utoipa::path(
    get,
    path = "/api/v1/organizations/{org}/dashboard",
    params(
        ("org" = String, Path, description = "Organization slug"),
        StatsParams
    ),
    responses(
        (status = 200, description = "Dashboard view model for the organization's variant.", body = DashboardDto),
        (status = 400, description = "Invalid stats period.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown organization.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    Extension(state): Extension<HttpState>,
    Path(org): Path<String>,
    ApiQuery(params): ApiQuery<StatsParams>,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_queries
        .render_dashboard(RenderDashboardQuery {
            organization: org,
            stats_period: params.stats_period,
        })
        .await
        .into_http()
        .map(Json)
}
