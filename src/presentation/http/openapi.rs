// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::teams::list_teams,
        crate::presentation::http::controllers::projects::list_projects,
        crate::presentation::http::controllers::dashboard::get_dashboard,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::teams::TeamListParams,
            crate::presentation::http::controllers::projects::StatsParams,
            crate::application::dto::TeamDto,
            crate::application::dto::TeamBadgeDto,
            crate::application::dto::ProjectDto,
            crate::application::dto::ProjectWithStatsDto,
            crate::application::dto::StatPointDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::CurrentDashboardDto,
            crate::application::dto::LegacyDashboardDto,
            crate::application::dto::TeamSectionDto,
            crate::application::dto::ProjectCardDto,
            crate::application::dto::EmptyStateDto,
            crate::application::effects::EffectPlan,
            crate::application::effects::ViewEffect
        )
    ),
    tags(
        (name = "Teams", description = "Team listing and badges"),
        (name = "Projects", description = "Projects and their statistics"),
        (name = "Dashboard", description = "Organization dashboard view models"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerListCustomizer),
    info(
        title = "Teamboard API",
        description = "Organization dashboard backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerListCustomizer;

impl Modify for ServerListCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// `/openapi.json` (served by Swagger UI), `/docs`, `/redoc` and a redirect
/// from `/` to the docs.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
