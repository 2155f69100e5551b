//! Response directives handed back to the transport.

/// A speech payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speech {
    PlainText(String),
    /// Speech Synthesis Markup, already wrapped in `<speak>`.
    Ssml(String),
}

impl Speech {
    pub fn plain(text: impl Into<String>) -> Self {
        Speech::PlainText(text.into())
    }

    /// Wraps `text` in `<speak>` and appends an audio cue pointing at `audio_url`.
    pub fn with_audio(text: &str, audio_url: &str) -> Self {
        Speech::Ssml(format!(
            "<speak>{}<audio src='{}'/></speak>",
            escape_ssml(text),
            audio_url
        ))
    }

    /// The raw payload, plain text or markup.
    pub fn as_str(&self) -> &str {
        match self {
            Speech::PlainText(text) | Speech::Ssml(text) => text,
        }
    }
}

/// What the skill wants the platform to do with this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseDirective {
    /// Speak and end the session.
    Tell { speech: Speech },
    /// Speak, show a card, and end the session.
    TellWithCard {
        speech: Speech,
        card_title: String,
        card_content: String,
    },
    /// Speak and keep the session open for an answer.
    Ask { speech: Speech, reprompt: Speech },
}

impl ResponseDirective {
    /// Whether this directive ends the session.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ResponseDirective::Ask { .. })
    }

    pub fn speech(&self) -> &Speech {
        match self {
            ResponseDirective::Tell { speech }
            | ResponseDirective::TellWithCard { speech, .. }
            | ResponseDirective::Ask { speech, .. } => speech,
        }
    }
}

fn escape_ssml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_audio_wraps_and_escapes() {
        let speech = Speech::with_audio("Salt & <pepper>", "https://example.com/boom.mp3");
        assert_eq!(
            speech,
            Speech::Ssml(
                "<speak>Salt &amp; &lt;pepper&gt;<audio src='https://example.com/boom.mp3'/></speak>"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_terminality() {
        let tell = ResponseDirective::Tell {
            speech: Speech::plain("Goodbye"),
        };
        let ask = ResponseDirective::Ask {
            speech: Speech::plain("Which one?"),
            reprompt: Speech::plain("Say help."),
        };
        assert!(tell.is_terminal());
        assert!(!ask.is_terminal());
        assert_eq!(ask.speech().as_str(), "Which one?");
    }
}
