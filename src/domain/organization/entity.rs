use crate::domain::organization::value_objects::{DashboardVariant, FeatureSet, OrganizationSlug};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub slug: OrganizationSlug,
    pub name: String,
    pub features: FeatureSet,
}

impl Organization {
    pub fn dashboard_variant(&self) -> DashboardVariant {
        DashboardVariant::select(&self.features)
    }
}
