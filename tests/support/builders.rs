// tests/support/builders.rs
use teamboard_core::domain::project::{Project, ProjectId, ProjectName, ProjectSlug};
use teamboard_core::domain::team::{Team, TeamId, TeamName, TeamSlug};

/// Three organizations: `acme` on the new dashboard, `oldco` on the legacy
/// one, and `quiet` with no teams at all.
pub const SAMPLE_FIXTURE: &str = r#"{
  "organizations": [
    {
      "slug": "acme",
      "name": "Acme Corp",
      "features": ["dashboard", "sso"],
      "teams": [
        { "id": 1, "slug": "backend", "name": "Backend" },
        { "id": 2, "slug": "frontend", "name": "Frontend" },
        { "id": 3, "name": "Idle Hands" }
      ],
      "projects": [
        { "id": "10", "slug": "api", "name": "API", "platform": "rust", "teams": ["backend"], "hourly_events": [4, 0, 7] },
        { "id": "11", "slug": "web", "name": "Web", "platform": "javascript", "teams": ["frontend", "backend", "frontend"] },
        { "id": "12", "slug": "docs", "teams": [] },
        { "id": "13", "slug": "legacy-svc", "teams": ["ghost", null] }
      ]
    },
    {
      "slug": "oldco",
      "features": [],
      "teams": [{ "id": "t1", "slug": "ops", "name": "Ops" }],
      "projects": [{ "id": "20", "slug": "infra", "teams": ["ops"], "hourly_events": [1] }]
    },
    {
      "slug": "quiet",
      "features": ["dashboard"],
      "projects": [{ "id": "30", "slug": "lonely" }]
    }
  ]
}"#;

pub struct TeamBuilder {
    id: String,
    slug: String,
    name: String,
}

impl TeamBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: format!("team-{slug}"),
            name: slug.clone(),
            slug,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Team {
        Team {
            id: TeamId::new(self.id).unwrap(),
            slug: TeamSlug::new(self.slug).unwrap(),
            name: TeamName::new(self.name).unwrap(),
        }
    }
}

pub struct ProjectBuilder {
    id: String,
    teams: Vec<String>,
    platform: Option<String>,
}

impl ProjectBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            teams: Vec::new(),
            platform: None,
        }
    }

    pub fn team(mut self, slug: impl Into<String>) -> Self {
        self.teams.push(slug.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn build(self) -> Project {
        Project {
            slug: ProjectSlug::new(format!("project-{}", self.id)).unwrap(),
            name: ProjectName::new(format!("Project {}", self.id)).unwrap(),
            id: ProjectId::new(self.id).unwrap(),
            platform: self.platform,
            teams: self
                .teams
                .into_iter()
                .map(|slug| TeamSlug::new(slug).unwrap())
                .collect(),
        }
    }
}
