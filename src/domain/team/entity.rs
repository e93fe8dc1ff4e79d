// src/domain/team/entity.rs
use crate::domain::team::value_objects::{TeamId, TeamName, TeamSlug};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub slug: TeamSlug,
    pub name: TeamName,
}

impl Team {
    /// Uppercased first letter of the team name, used as the avatar fallback.
    pub fn avatar_letter(&self) -> char {
        self.name
            .as_str()
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('#')
    }
}
