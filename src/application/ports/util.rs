// src/application/ports/util.rs

/// Derives a slug from a display name when a record arrives without one.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
