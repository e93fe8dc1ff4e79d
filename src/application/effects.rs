// src/application/effects.rs
//! Global UI-state effects attached to views.
//!
//! Rendering stays pure; a view only declares what it needs done to the
//! document while it is mounted. [`MountedView`] applies that plan to a
//! [`DocumentState`](crate::application::ports::ui_state::DocumentState) and undoes it when dropped.

use crate::application::ports::DocumentStatePort;
use crate::domain::organization::DashboardVariant;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DASHBOARD_BODY_CLASS: &str = "org-dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "class", rename_all = "snake_case")]
pub enum ViewEffect {
    AddBodyClass(String),
    RemoveBodyClass(String),
}

impl ViewEffect {
    pub fn apply(&self, document: &DocumentStatePort) {
        match self {
            Self::AddBodyClass(class) => document.add_body_class(class),
            Self::RemoveBodyClass(class) => document.remove_body_class(class),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EffectPlan {
    pub on_mount: Vec<ViewEffect>,
    pub on_unmount: Vec<ViewEffect>,
}

impl EffectPlan {
    pub fn for_variant(variant: DashboardVariant) -> Self {
        match variant {
            DashboardVariant::Current => Self::body_class(DASHBOARD_BODY_CLASS),
            DashboardVariant::Legacy => Self::default(),
        }
    }

    /// Add `class` while mounted, remove it on unmount.
    pub fn body_class(class: &str) -> Self {
        Self {
            on_mount: vec![ViewEffect::AddBodyClass(class.to_string())],
            on_unmount: vec![ViewEffect::RemoveBodyClass(class.to_string())],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.on_mount.is_empty() && self.on_unmount.is_empty()
    }
}

/// Keeps a view's mount effects applied for as long as it lives.
pub struct MountedView<'d> {
    document: &'d DocumentStatePort,
    on_unmount: Vec<ViewEffect>,
}

impl<'d> MountedView<'d> {
    pub fn mount(document: &'d DocumentStatePort, plan: EffectPlan) -> Self {
        for effect in &plan.on_mount {
            effect.apply(document);
        }
        tracing::trace!(effects = plan.on_mount.len(), "view mounted");
        Self {
            document,
            on_unmount: plan.on_unmount,
        }
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedView<'_> {
    fn drop(&mut self) {
        for effect in &self.on_unmount {
            effect.apply(self.document);
        }
        tracing::trace!(effects = self.on_unmount.len(), "view unmounted");
    }
}
