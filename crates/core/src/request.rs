//! Inbound request types as delivered by the voice platform.
//!
//! Slot parsing happens upstream; these types only carry what the platform
//! already extracted from the user's speech.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Slot name -> slot, as sent on an intent.
pub type Slots = HashMap<String, Slot>;

/// A named parameter extracted from user speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// What the user asked for, with its slot values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slots: Slots,
}

/// Platforms send `"slots": null` for intents without slots.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Slots, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Slots>::deserialize(deserializer)?.unwrap_or_default())
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Slots::new(),
        }
    }

    /// Adds a slot value, mostly useful for building requests in tests.
    pub fn with_slot(mut self, name: &str, value: &str) -> Self {
        self.slots.insert(
            name.to_string(),
            Slot {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
        );
        self
    }
}

/// Returns the trimmed value of `slot_name`.
///
/// A slot that is present but carries no value, or only whitespace, counts as
/// absent.
pub fn slot_value<'a>(slots: &'a Slots, slot_name: &str) -> Option<&'a str> {
    slots
        .get(slot_name)
        .and_then(|slot| slot.value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
}

/// The platform session. Opaque to dispatch apart from logging and the
/// attributes echoed back on follow-up prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub user: Option<User>,
}
