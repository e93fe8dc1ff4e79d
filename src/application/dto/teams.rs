// src/application/dto/teams.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::team::Team;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_AVATAR_SIZE: u32 = 24;
const MAX_AVATAR_SIZE: u32 = 256;

/// Presentation options for team badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeOptions {
    pub avatar_size: u32,
    pub hide_avatar: bool,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            avatar_size: DEFAULT_AVATAR_SIZE,
            hide_avatar: false,
        }
    }
}

impl BadgeOptions {
    pub fn new(avatar_size: Option<u32>, hide_avatar: Option<bool>) -> ApplicationResult<Self> {
        let avatar_size = avatar_size.unwrap_or(DEFAULT_AVATAR_SIZE);
        if avatar_size == 0 || avatar_size > MAX_AVATAR_SIZE {
            return Err(ApplicationError::validation(format!(
                "avatar size must be between 1 and {MAX_AVATAR_SIZE}"
            )));
        }
        Ok(Self {
            avatar_size,
            hide_avatar: hide_avatar.unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamBadgeDto {
    pub slug: String,
    /// Always `#<slug>`.
    pub display_name: String,
    pub avatar_letter: String,
    pub avatar_size: u32,
    pub hide_avatar: bool,
}

impl TeamBadgeDto {
    pub fn new(team: &Team, options: BadgeOptions) -> Self {
        Self {
            slug: team.slug.as_str().to_string(),
            display_name: team.slug.display_name(),
            avatar_letter: team.avatar_letter().to_string(),
            avatar_size: options.avatar_size,
            hide_avatar: options.hide_avatar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub badge: TeamBadgeDto,
}

impl TeamDto {
    pub fn new(team: &Team, options: BadgeOptions) -> Self {
        Self {
            id: team.id.as_str().to_string(),
            slug: team.slug.as_str().to_string(),
            name: team.name.as_str().to_string(),
            badge: TeamBadgeDto::new(team, options),
        }
    }
}
