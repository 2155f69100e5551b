//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the skill handler and
//! configuration shared by every request.

use crate::config::Config;
use anyhow::Context;
use jester_core::{CategorySkill, ContentTable, SkillHandler};
use std::sync::Arc;
use tracing::info;

/// The shared application state, created once at startup and passed to all handlers.
/// All fields are public to be accessible from other modules.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<dyn SkillHandler>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the configured skill variant, applying any content or sound overrides.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let mut profile = config.variant.profile();
        if let Some(base_url) = &config.sound_base_url {
            profile = profile.with_sound_base_url(base_url.clone());
        }

        let content = match &config.content_path {
            Some(path) => {
                info!(path = %path.display(), "Loading content override");
                ContentTable::from_path(path)
                    .with_context(|| format!("Failed to load content from {}", path.display()))?
            }
            None => config.variant.builtin_content(),
        };

        let skill = CategorySkill::new(profile, content);
        info!(
            variant = %config.variant,
            intent = %skill.profile().intent_name,
            categories = %skill.registry().joined(),
            "Skill ready"
        );

        Ok(Self {
            skill: Arc::new(skill),
            config: Arc::new(config),
        })
    }
}
