//! Skill profiles: the names, labels and prompts that distinguish one
//! category skill from another.

use crate::content::ContentTable;
use crate::data;
use std::fmt;
use std::str::FromStr;

pub const ITEM_SLOT: &str = "Item";
const SOUND_BASE_URL: &str = "https://s3.amazonaws.com/sounds226/";

/// Which built-in skill to serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillVariant {
    Jokes,
    Recipes,
}

impl FromStr for SkillVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jokes" | "joke" => Ok(SkillVariant::Jokes),
            "recipes" | "recipe" => Ok(SkillVariant::Recipes),
            other => Err(format!("'{}' is not a known skill variant", other)),
        }
    }
}

impl fmt::Display for SkillVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillVariant::Jokes => write!(f, "jokes"),
            SkillVariant::Recipes => write!(f, "recipes"),
        }
    }
}

impl SkillVariant {
    pub fn profile(self) -> SkillProfile {
        match self {
            SkillVariant::Jokes => SkillProfile::jokes(),
            SkillVariant::Recipes => SkillProfile::recipes(),
        }
    }

    pub fn builtin_content(self) -> ContentTable {
        match self {
            SkillVariant::Jokes => ContentTable::from_static(data::JOKES),
            SkillVariant::Recipes => ContentTable::from_static(data::RECIPES),
        }
    }
}

/// Labels and prompt fragments for one skill.
#[derive(Debug, Clone)]
pub struct SkillProfile {
    /// Spoken in the welcome, e.g. "Yo Mama Jokes".
    pub skill_name: String,
    /// The invocation name users say, e.g. "Yo Mama".
    pub invocation: String,
    /// The intent that looks up an item.
    pub intent_name: String,
    pub item_slot: String,
    /// Card title prefix, e.g. "Joke".
    pub label: String,
    pub noun: String,
    pub plural: String,
    /// Used in the help reprompt's example phrasing.
    pub example_category: String,
    pub categories: Vec<String>,
    /// Ambient sound files; when empty, speech is plain text.
    pub sound_effects: Vec<String>,
    pub sound_base_url: String,
}

impl SkillProfile {
    pub fn jokes() -> Self {
        Self {
            skill_name: "Yo Mama Jokes".to_string(),
            invocation: "Yo Mama".to_string(),
            intent_name: "JokeIntent".to_string(),
            item_slot: ITEM_SLOT.to_string(),
            label: "Joke".to_string(),
            noun: "joke".to_string(),
            plural: "jokes".to_string(),
            example_category: "fat".to_string(),
            categories: strings(&[
                "fat", "stupid", "ugly", "old", "poor", "short", "skinny", "smells", "bald",
            ]),
            sound_effects: strings(&[
                "NyukNyuk.mp3",
                "boom.mp3",
                "laugh1.mp3",
                "laugh2.mp3",
                "laugh3.mp3",
                "laugh4.mp3",
            ]),
            sound_base_url: SOUND_BASE_URL.to_string(),
        }
    }

    pub fn recipes() -> Self {
        Self {
            skill_name: "Quick Recipes".to_string(),
            invocation: "Quick Recipes".to_string(),
            intent_name: "RecipeIntent".to_string(),
            item_slot: ITEM_SLOT.to_string(),
            label: "Recipe".to_string(),
            noun: "recipe".to_string(),
            plural: "recipes".to_string(),
            example_category: "dinner".to_string(),
            categories: strings(&["breakfast", "lunch", "dinner", "dessert", "snack"]),
            sound_effects: Vec::new(),
            sound_base_url: SOUND_BASE_URL.to_string(),
        }
    }

    /// Overrides where sound effect files are fetched from.
    pub fn with_sound_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.sound_base_url = base_url;
        self
    }

    pub fn card_title(&self, category: &str) -> String {
        format!("{} for category: {}", self.label, category)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
