//! Intent Dispatch
//!
//! This module routes an inbound intent to its handler, resolves the target
//! category (explicit slot, then registry lookup, then a random fallback),
//! picks a content line and builds the response. Nothing here fails hard: an
//! unknown category or intent turns into a follow-up question so the
//! conversation can continue.

use crate::category::{CategoryRegistry, normalize};
use crate::content::ContentTable;
use crate::profile::SkillProfile;
use crate::random::{RandomSource, ThreadRandom, choose};
use crate::request::{Intent, Session, Slots, slot_value};
use crate::response::{ResponseDirective, Speech};
use std::sync::Arc;
use tracing::{info, warn};

/// Platforms that deliver launch as an intent rather than a launch request use this name.
pub const LAUNCH_INTENT: &str = "LaunchIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";

const GOODBYE: &str = "Goodbye";
const LOOKUP_REPROMPT: &str = "What else can I help with?";

/// Conditions that need clarification from the user rather than a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    /// The category is unknown, or known but without any content.
    #[error("No content available for category '{category}'")]
    InvalidCategory {
        category: String,
        /// Whether the user named the category or it was picked at random.
        supplied: bool,
    },
    #[error("Unrecognized intent: '{0}'")]
    UnrecognizedIntent(String),
}

/// Lifecycle callbacks a skill implements. The transport calls these after it
/// has verified the request belongs to this skill.
pub trait SkillHandler: Send + Sync {
    fn on_session_started(&self, session: &Session) {
        info!(session_id = %session.session_id, "Session started");
    }

    /// Called when the user opens the skill without asking for anything.
    fn on_launch(&self, session: &Session) -> ResponseDirective;

    fn on_intent(&self, intent: &Intent, session: &Session) -> ResponseDirective;

    fn on_session_end(&self, session: &Session, reason: Option<&str>) {
        info!(session_id = %session.session_id, reason = ?reason, "Session ended");
    }
}

/// A skill that serves one line of content from a category the user picks.
///
/// The same type backs every variant; the [`SkillProfile`] and
/// [`ContentTable`] decide what it says.
pub struct CategorySkill {
    profile: SkillProfile,
    registry: CategoryRegistry,
    content: ContentTable,
    random: Arc<dyn RandomSource>,
}

impl CategorySkill {
    pub fn new(profile: SkillProfile, content: ContentTable) -> Self {
        Self::with_random(profile, content, Arc::new(ThreadRandom))
    }

    pub fn with_random(
        profile: SkillProfile,
        content: ContentTable,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let registry = CategoryRegistry::new(&profile.categories);
        for category in content.categories() {
            if !registry.is_valid_category(category) {
                warn!(%category, "Content category is not registered and will never be served");
            }
        }
        Self {
            profile,
            registry,
            content,
            random,
        }
    }

    pub fn profile(&self) -> &SkillProfile {
        &self.profile
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Routes one intent to its handler and always produces a directive.
    pub fn dispatch(&self, intent_name: &str, slots: &Slots, session: &Session) -> ResponseDirective {
        match self.route(intent_name, slots) {
            Ok(directive) => directive,
            Err(err) => {
                info!(session_id = %session.session_id, error = %err, "Asking user to clarify");
                self.clarify(err)
            }
        }
    }

    fn route(&self, intent_name: &str, slots: &Slots) -> Result<ResponseDirective, SkillError> {
        match intent_name {
            name if name == self.profile.intent_name => self.lookup(slots),
            LAUNCH_INTENT => Ok(self.welcome()),
            STOP_INTENT | CANCEL_INTENT => Ok(ResponseDirective::Tell {
                speech: Speech::plain(GOODBYE),
            }),
            HELP_INTENT => Ok(self.help()),
            other => Err(SkillError::UnrecognizedIntent(other.to_string())),
        }
    }

    /// Resolves the category and returns one content line for it.
    fn lookup(&self, slots: &Slots) -> Result<ResponseDirective, SkillError> {
        let (category, supplied) = match slot_value(slots, &self.profile.item_slot) {
            Some(value) => (normalize(value), true),
            None => {
                let category = self
                    .registry
                    .random_category(self.random.as_ref())
                    .unwrap_or_default()
                    .to_string();
                (category, false)
            }
        };

        let invalid = || SkillError::InvalidCategory {
            category: category.clone(),
            supplied,
        };

        if !self.registry.is_valid_category(&category) {
            return Err(invalid());
        }
        let item = choose(self.random.as_ref(), self.content.items(&category))
            .ok_or_else(invalid)?;

        info!(%category, supplied, "Serving {}", self.profile.noun);
        Ok(ResponseDirective::TellWithCard {
            speech: self.speak(item),
            card_title: self.profile.card_title(&category),
            card_content: item.clone(),
        })
    }

    /// Wraps a content line with a random ambient sound, when the profile has any.
    fn speak(&self, item: &str) -> Speech {
        match choose(self.random.as_ref(), &self.profile.sound_effects) {
            Some(sound) => Speech::with_audio(
                item,
                &format!("{}{}", self.profile.sound_base_url, sound),
            ),
            None => Speech::plain(item),
        }
    }

    fn welcome(&self) -> ResponseDirective {
        let p = &self.profile;
        ResponseDirective::Ask {
            speech: Speech::plain(format!(
                "Welcome to {}. You can request a category by saying, ask {} to tell me a {} about a category such as ... {}... Now, what category would you like?",
                p.skill_name,
                p.invocation,
                p.noun,
                self.registry.joined()
            )),
            reprompt: Speech::plain("For instructions on what you can say, please say help me."),
        }
    }

    fn help(&self) -> ResponseDirective {
        let p = &self.profile;
        ResponseDirective::Ask {
            speech: Speech::plain(format!(
                "You can ask a question like, tell me a {} about a category... Categories include: {}... Or, you can say exit... Now, what can I help you with?",
                p.noun,
                self.registry.joined()
            )),
            reprompt: self.help_reprompt(),
        }
    }

    fn help_reprompt(&self) -> Speech {
        Speech::plain(format!(
            "You can say things like, tell me a {} about {} or you can say exit... Now, what can I help you with?",
            self.profile.noun, self.profile.example_category
        ))
    }

    fn clarify(&self, err: SkillError) -> ResponseDirective {
        let categories = self.registry.joined();
        match err {
            SkillError::InvalidCategory {
                category,
                supplied: true,
            } => ResponseDirective::Ask {
                speech: Speech::plain(format!(
                    "I'm sorry, I currently do not know {} in the {} category. Now, what category would you like?  Choices include {}",
                    self.profile.plural, category, categories
                )),
                reprompt: Speech::plain(LOOKUP_REPROMPT),
            },
            SkillError::InvalidCategory {
                supplied: false, ..
            } => ResponseDirective::Ask {
                speech: Speech::plain(format!(
                    "I'm sorry, I currently do not know that category. What category would you like?  Choices include {}",
                    categories
                )),
                reprompt: Speech::plain(LOOKUP_REPROMPT),
            },
            SkillError::UnrecognizedIntent(_) => ResponseDirective::Ask {
                speech: Speech::plain(format!(
                    "Sorry, I didn't catch that. You can ask me for a {} about one of these categories: {}. What would you like?",
                    self.profile.noun, categories
                )),
                reprompt: self.help_reprompt(),
            },
        }
    }
}

impl SkillHandler for CategorySkill {
    fn on_launch(&self, session: &Session) -> ResponseDirective {
        info!(session_id = %session.session_id, "Launch request");
        self.welcome()
    }

    fn on_intent(&self, intent: &Intent, session: &Session) -> ResponseDirective {
        info!(session_id = %session.session_id, intent = %intent.name, "Intent request");
        self.dispatch(&intent.name, &intent.slots, session)
    }
}
