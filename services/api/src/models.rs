//! Wire Models
//!
//! This module defines the JSON envelope exchanged with the voice platform,
//! plus the conversion from core response directives. The `utoipa` derives feed
//! the OpenAPI document.

use jester_core::{Intent, ResponseDirective, Session, Speech};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub const RESPONSE_VERSION: &str = "1.0";

/// A request from the voice platform.
#[derive(Deserialize, ToSchema, Debug)]
pub struct RequestEnvelope {
    #[serde(default)]
    #[schema(example = "1.0")]
    pub version: String,
    #[schema(value_type = Object)]
    pub session: Session,
    #[schema(value_type = Object)]
    pub request: SkillRequest,
}

/// The request body, discriminated by its `type` field.
#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest {
        #[serde(default, rename = "requestId")]
        request_id: String,
    },
    IntentRequest {
        #[serde(default, rename = "requestId")]
        request_id: String,
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(default, rename = "requestId")]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl SkillRequest {
    pub fn request_id(&self) -> &str {
        match self {
            SkillRequest::LaunchRequest { request_id }
            | SkillRequest::IntentRequest { request_id, .. }
            | SkillRequest::SessionEndedRequest { request_id, .. } => request_id,
            SkillRequest::Unsupported => "",
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl From<Speech> for OutputSpeech {
    fn from(speech: Speech) -> Self {
        match speech {
            Speech::PlainText(text) => OutputSpeech::PlainText { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Card {
    Simple { title: String, content: String },
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

/// A response to the voice platform.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    #[schema(example = "1.0")]
    pub version: String,
    #[schema(value_type = Object)]
    pub session_attributes: Map<String, Value>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// Builds the envelope for a directive, echoing the session's attributes.
    pub fn from_directive(directive: ResponseDirective, session_attributes: Map<String, Value>) -> Self {
        let response = match directive {
            ResponseDirective::Tell { speech } => ResponseBody {
                output_speech: Some(speech.into()),
                card: None,
                reprompt: None,
                should_end_session: true,
            },
            ResponseDirective::TellWithCard {
                speech,
                card_title,
                card_content,
            } => ResponseBody {
                output_speech: Some(speech.into()),
                card: Some(Card::Simple {
                    title: card_title,
                    content: card_content,
                }),
                reprompt: None,
                should_end_session: true,
            },
            ResponseDirective::Ask { speech, reprompt } => ResponseBody {
                output_speech: Some(speech.into()),
                card: None,
                reprompt: Some(Reprompt {
                    output_speech: reprompt.into(),
                }),
                should_end_session: false,
            },
        };
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response,
        }
    }

    /// The acknowledgement sent for a session-ended notification.
    pub fn session_ended() -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes: Map::new(),
            response: ResponseBody {
                output_speech: None,
                card: None,
                reprompt: None,
                should_end_session: true,
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
