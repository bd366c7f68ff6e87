use std::fmt;

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;

/// The field currently being collected by the contact dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Complete,
    Finished,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Name => "name",
            Step::Email => "email",
            Step::Subject => "subject",
            Step::Message => "message",
            Step::Complete => "complete",
            Step::Finished => "finished",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    User,
    Bot,
}

impl Participant {
    pub fn class(&self) -> &'static str {
        match self {
            Participant::User => "user",
            Participant::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub participant: Participant,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { participant: Participant::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { participant: Participant::Bot, text: text.into() }
    }
}

/// One accepted input and the single reply it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub user: ChatMessage,
    pub bot: ChatMessage,
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Loose `local@domain.tld` shape check, not an RFC validator.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

/// Strips surrounding whitespace, including a stray byte order mark.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn greeting() -> String {
    format!(
        "Hi there! I'm {}'s assistant. What's your name?",
        config::OWNER_NAME
    )
}

/// Scripted contact dialogue: cursor plus the fields collected so far.
///
/// Fields and cursor only ever change together through [`submit`](Self::submit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    step: Step,
    fields: ContactFields,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// False once the dialogue has finished; the input surface stays disabled.
    pub fn accepts_input(&self) -> bool {
        self.step != Step::Finished
    }

    /// Runs one turn. Returns `None` (and changes nothing) for blank input.
    pub fn submit(&mut self, raw: &str) -> Option<Turn> {
        let input = trim_input(raw);
        if input.is_empty() {
            return None;
        }

        let (next, reply) = match self.step {
            Step::Name => {
                self.fields.name = input.to_string();
                (
                    Step::Email,
                    format!("Nice to meet you, {}! What's your email address?", input),
                )
            }
            Step::Email if !is_valid_email(input) => (
                Step::Email,
                "Please enter a valid email address.".to_string(),
            ),
            Step::Email => {
                self.fields.email = input.to_string();
                (
                    Step::Subject,
                    "Great! What's the subject of your message?".to_string(),
                )
            }
            Step::Subject => {
                self.fields.subject = input.to_string();
                (
                    Step::Message,
                    format!("Awesome! Now, what's your message for {}?", config::OWNER_NAME),
                )
            }
            Step::Message => {
                self.fields.message = input.to_string();
                (
                    Step::Complete,
                    "Thank you! Your message has been recorded. Would you like to send another message? (Type \"yes\" or \"reset\")".to_string(),
                )
            }
            Step::Complete if input.eq_ignore_ascii_case("yes") => {
                self.fields = ContactFields::default();
                (
                    Step::Name,
                    "Alright, let's start over. What's your name?".to_string(),
                )
            }
            Step::Complete => {
                info!("Contact form submitted: {:?}", self.fields);
                (
                    Step::Finished,
                    format!(
                        "Your message has been sent! {} will get back to you soon.",
                        config::OWNER_NAME
                    ),
                )
            }
            // Only reachable if a caller keeps submitting after the input was disabled.
            Step::Finished => (
                Step::Complete,
                "Something went wrong. Please start over by typing \"reset\".".to_string(),
            ),
        };

        self.step = next;
        Some(Turn {
            user: ChatMessage::user(input),
            bot: ChatMessage::bot(reply),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: &mut ConversationState, inputs: &[&str]) -> Vec<Turn> {
        inputs.iter().filter_map(|i| state.submit(i)).collect()
    }

    #[test]
    fn name_is_trimmed_and_stored() {
        let mut state = ConversationState::new();
        let turn = state.submit("  Sam  ").unwrap();
        assert_eq!(state.step(), Step::Email);
        assert_eq!(state.fields().name, "Sam");
        assert_eq!(turn.user, ChatMessage::user("Sam"));
        assert_eq!(turn.bot.participant, Participant::Bot);
        assert!(turn.bot.text.contains("Sam"));
    }

    #[test]
    fn invalid_email_reprompts_without_storing() {
        let mut state = ConversationState::new();
        state.submit("Sam");
        for bad in ["not-an-email", "sam@example", "example.com", "@.", "a @b.c"] {
            let turn = state.submit(bad).unwrap();
            assert_eq!(state.step(), Step::Email, "input {bad:?}");
            assert_eq!(state.fields().email, "");
            assert_eq!(turn.bot.text, "Please enter a valid email address.");
        }
    }

    #[test]
    fn valid_email_advances() {
        let mut state = ConversationState::new();
        state.submit("Alice");
        state.submit("alice@example.com");
        assert_eq!(state.step(), Step::Subject);
        assert_eq!(state.fields().email, "alice@example.com");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("sam@x.io"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@examplecom"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn happy_path_then_restart() {
        let mut state = ConversationState::new();
        run(&mut state, &["Sam", "sam@x.io", "Hi", "Hello"]);
        assert_eq!(state.step(), Step::Complete);
        assert_eq!(
            state.fields(),
            &ContactFields {
                name: "Sam".into(),
                email: "sam@x.io".into(),
                subject: "Hi".into(),
                message: "Hello".into(),
            }
        );

        state.submit("YES").unwrap();
        assert_eq!(state.step(), Step::Name);
        assert_eq!(state.fields(), &ContactFields::default());
        assert!(state.accepts_input());
    }

    #[test]
    fn anything_but_yes_finishes() {
        let mut state = ConversationState::new();
        run(&mut state, &["Sam", "sam@x.io", "Hi", "Hello"]);
        let turn = state.submit("no").unwrap();
        assert_eq!(state.step(), Step::Finished);
        assert!(!state.accepts_input());
        assert!(turn.bot.text.starts_with("Your message has been sent!"));
        // nothing stored on the complete step
        assert_eq!(state.fields().message, "Hello");
    }

    #[test]
    fn finished_recovers_to_complete() {
        let mut state = ConversationState::new();
        run(&mut state, &["Sam", "sam@x.io", "Hi", "Hello", "reset"]);
        let fields = state.fields().clone();
        let turn = state.submit("hello?").unwrap();
        assert_eq!(state.step(), Step::Complete);
        assert_eq!(
            turn.bot.text,
            "Something went wrong. Please start over by typing \"reset\"."
        );
        assert_eq!(state.fields(), &fields);
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        let mut state = ConversationState::new();
        assert!(state.submit("\u{feff}").is_none());
        assert!(state.submit(" \u{feff}\t").is_none());
        assert_eq!(state, ConversationState::new());

        state.submit("\u{feff}Sam\u{feff}").unwrap();
        assert_eq!(state.fields().name, "Sam");
    }

    #[test]
    fn blank_input_is_ignored_at_every_step() {
        let mut state = ConversationState::new();
        let script = ["Sam", "sam@x.io", "Hi", "Hello", "no"];
        for input in script {
            let before = state.clone();
            assert!(state.submit("").is_none());
            assert!(state.submit("   \t").is_none());
            assert_eq!(state, before);
            state.submit(input);
        }
        let before = state.clone();
        assert!(state.submit(" ").is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn restart_reproduces_the_same_dialogue_shape() {
        let script = ["Sam", "nope", "sam@x.io", "Hi", "Hello"];
        let mut state = ConversationState::new();
        let first = run(&mut state, &script);
        state.submit("yes").unwrap();
        let second = run(&mut state, &script);
        assert_eq!(first, second);
        assert_eq!(state.step(), Step::Complete);
    }

    #[test]
    fn step_names() {
        assert_eq!(Step::default().to_string(), "name");
        assert_eq!(Step::Finished.to_string(), "finished");
    }
}
