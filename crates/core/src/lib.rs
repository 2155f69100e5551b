//! Jester Core
//!
//! Intent dispatch for category-based voice skills: a registry of valid
//! categories, a static content table, and a dispatcher that turns an intent
//! into a spoken response. Transport concerns (HTTP, application identity
//! checks) live in the `jester-api` service.

pub mod category;
pub mod content;
pub mod data;
pub mod profile;
pub mod random;
pub mod request;
pub mod response;
pub mod skill;

pub use category::CategoryRegistry;
pub use content::{ContentError, ContentTable};
pub use profile::{SkillProfile, SkillVariant};
pub use request::{Intent, Session, Slot, Slots};
pub use response::{ResponseDirective, Speech};
pub use skill::{CategorySkill, SkillError, SkillHandler};
