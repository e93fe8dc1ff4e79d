use std::sync::Arc;

use crate::domain::{organization::OrganizationRepository, team::TeamRepository};

pub struct TeamQueryService {
    pub(super) org_repo: Arc<dyn OrganizationRepository>,
    pub(super) team_repo: Arc<dyn TeamRepository>,
}

impl TeamQueryService {
    pub fn new(
        org_repo: Arc<dyn OrganizationRepository>,
        team_repo: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            org_repo,
            team_repo,
        }
    }
}
