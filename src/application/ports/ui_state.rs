// src/application/ports/ui_state.rs

/// Document-level UI state shared by every mounted view.
pub trait DocumentState: Send + Sync {
    fn add_body_class(&self, class: &str);
    fn remove_body_class(&self, class: &str);
    fn has_body_class(&self, class: &str) -> bool;
    fn body_classes(&self) -> Vec<String>;
}
