// tests/support/mocks/repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use teamboard_core::domain::errors::{DomainError, DomainResult};
use teamboard_core::domain::organization::OrganizationSlug;
use teamboard_core::domain::project::{ProjectId, ProjectStats, ProjectStatsRepository, StatsPeriod};

/// Stats source that records how often it was asked.
pub struct CountingStatsRepo {
    inner: Arc<dyn ProjectStatsRepository>,
    calls: AtomicUsize,
}

impl CountingStatsRepo {
    pub fn new(inner: Arc<dyn ProjectStatsRepository>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectStatsRepository for CountingStatsRepo {
    async fn stats_for_organization(
        &self,
        org: &OrganizationSlug,
        period: StatsPeriod,
    ) -> DomainResult<HashMap<ProjectId, ProjectStats>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.stats_for_organization(org, period).await
    }
}

/// Stats source that is always down.
pub struct FailingStatsRepo;

#[async_trait]
impl ProjectStatsRepository for FailingStatsRepo {
    async fn stats_for_organization(
        &self,
        _org: &OrganizationSlug,
        _period: StatsPeriod,
    ) -> DomainResult<HashMap<ProjectId, ProjectStats>> {
        Err(DomainError::Persistence("stats backend unavailable".into()))
    }
}
