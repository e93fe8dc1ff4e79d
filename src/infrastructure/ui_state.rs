// src/infrastructure/ui_state.rs
use crate::application::ports::ui_state::DocumentState;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Process-local document state. Classes are kept sorted.
#[derive(Default)]
pub struct InMemoryDocumentState {
    body_classes: Mutex<BTreeSet<String>>,
}

impl InMemoryDocumentState {
    fn classes(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.body_classes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentState for InMemoryDocumentState {
    fn add_body_class(&self, class: &str) {
        self.classes().insert(class.to_string());
    }

    fn remove_body_class(&self, class: &str) {
        self.classes().remove(class);
    }

    fn has_body_class(&self, class: &str) -> bool {
        self.classes().contains(class)
    }

    fn body_classes(&self) -> Vec<String> {
        self.classes().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::effects::{DASHBOARD_BODY_CLASS, EffectPlan, MountedView};
    use crate::domain::organization::DashboardVariant;

    #[test]
    fn add_and_remove_are_idempotent() {
        let document = InMemoryDocumentState::default();
        document.add_body_class("a");
        document.add_body_class("a");
        assert_eq!(document.body_classes(), vec!["a".to_string()]);
        document.remove_body_class("a");
        document.remove_body_class("a");
        assert!(document.body_classes().is_empty());
    }

    #[test]
    fn dashboard_mount_cycle() {
        let document = InMemoryDocumentState::default();
        let mounted = MountedView::mount(
            &document,
            EffectPlan::for_variant(DashboardVariant::Current),
        );
        assert!(document.has_body_class(DASHBOARD_BODY_CLASS));
        drop(mounted);
        assert!(!document.has_body_class(DASHBOARD_BODY_CLASS));
    }
}
