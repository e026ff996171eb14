//! Chat conversation state and transcript rendering
//!
//! The conversation is an append-only list of messages owned by whoever
//! displays it. Messages are never edited once appended; formatted output is
//! derived from them on every render.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::parser::parse;
use crate::renderer::html::{escape_html, HtmlBuilder};
use crate::renderer::render_text;
use crate::RenderConfig;

use super::currency::summary_line;
use super::records::{AdviceQuery, AdviceResponse, TransactionStats, Validate};

/// First assistant message shown when the chat opens
pub const WELCOME_MESSAGE: &str = "Hey! I'm here to help you make smarter money decisions. Think of me as your personal finance buddy who actually knows what they're talking about 😊

I can help you figure out budgeting, saving, investing, cutting expenses, or planning for big goals. Just ask me anything about your finances and I'll give you straight, practical advice.

Fair warning though - I only do finance stuff. Ask me about the weather or sports and I'll politely redirect you back to money talk!

So, what's on your mind?";

/// Assistant reply used when the advice request fails
pub const FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Prompts offered before the user has asked anything
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "How can I save 20% of my salary?",
    "What's a good monthly budget breakdown?",
    "Should I invest or pay off debt first?",
    "How do I build an emergency fund?",
    "What are smart ways to reduce expenses?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered chat history plus whether a reply is outstanding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// A conversation opened with the assistant's welcome message
    pub fn with_welcome() -> Self {
        let mut conversation = Self::new();
        conversation.push_assistant(WELCOME_MESSAGE);
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// True while a submitted question is waiting for its reply
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Suggested questions are offered until the user has said anything
    pub fn shows_suggestions(&self) -> bool {
        matches!(self.messages.as_slice(), [only] if only.role == Role::Assistant)
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Append the fixed apology reply
    pub fn push_failure(&mut self) {
        self.push_assistant(FAILURE_REPLY);
    }

    /// Record a user question and return the request to send for it
    ///
    /// Blank input, or input while a reply is still pending, is ignored.
    pub fn submit(&mut self, input: &str) -> Option<AdviceQuery> {
        let query = input.trim();
        if query.is_empty() || self.pending {
            return None;
        }
        self.push_user(query);
        self.pending = true;
        debug!(messages = self.len(), "question submitted");
        Some(AdviceQuery::new(query))
    }

    /// Record the outcome of the advice request
    ///
    /// A failed request, or a reply that does not validate, appends the
    /// apology reply instead.
    pub fn receive<E: fmt::Display>(&mut self, outcome: Result<AdviceResponse, E>) {
        self.pending = false;
        match outcome {
            Ok(reply) => match reply.validate() {
                Ok(()) => self.push_assistant(reply.response),
                Err(e) => {
                    warn!(error = %e, "rejected advice reply");
                    self.push_failure();
                }
            },
            Err(e) => {
                warn!(error = %e, "advice request failed");
                self.push_failure();
            }
        }
    }

    /// Parse a transcript: a JSON array of `{role, content}` objects
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let messages: Vec<Message> = serde_json::from_str(json)?;
        Ok(Self {
            messages,
            pending: false,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.messages)
    }

    /// Load a transcript file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let json = crate::read_input(path)?;
        Ok(Self::from_json(&json)?)
    }
}

/// Render a conversation as HTML message bubbles
///
/// User text is escaped and shown as typed; assistant replies go through the
/// formatter. An optional summary of the user's totals comes first.
pub fn render_transcript(
    conversation: &Conversation,
    stats: Option<&TransactionStats>,
    config: &RenderConfig,
) -> String {
    let html = &config.html;
    let mut builder = HtmlBuilder::new(html, &config.theme);

    if let Some(stats) = stats {
        let class = builder.class_attr("summary");
        builder.add_raw(format!("<p{}>{}</p>", class, escape_html(&summary_line(stats))));
    }

    for message in conversation.messages() {
        let role = message.role();
        let attrs = format!(
            r#"{} data-role="{}""#,
            builder.class_attr(&format!("message-{}", role)),
            role
        );
        builder.open("div", &attrs);
        match role {
            Role::User => {
                let class = builder.class_attr("user-text");
                builder.add_raw(format!("<p{}>{}</p>", class, escape_html(message.content())));
            }
            Role::Assistant => {
                let doc = parse(message.content());
                if html.container {
                    let class = builder.class_attr("container");
                    builder.open("div", &class);
                }
                for block in doc.iter() {
                    builder.add_block(block);
                }
                if html.container {
                    builder.close("div");
                }
            }
        }
        builder.close("div");
    }
    builder.finish()
}

/// Render a conversation as plain text
pub fn transcript_text(conversation: &Conversation, stats: Option<&TransactionStats>) -> String {
    let mut parts = Vec::new();
    if let Some(stats) = stats {
        parts.push(summary_line(stats));
    }
    for message in conversation.messages() {
        parts.push(match message.role() {
            Role::User => format!("You: {}", message.content()),
            Role::Assistant => format!("Advisor:\n{}", render_text(&parse(message.content()))),
        });
    }
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlConfig;

    fn reply(text: &str) -> AdviceResponse {
        AdviceResponse {
            response: text.to_string(),
            query: "q".to_string(),
        }
    }

    #[test]
    fn test_welcome_and_suggestions() {
        let mut conversation = Conversation::with_welcome();
        assert_eq!(conversation.len(), 1);
        assert!(conversation.shows_suggestions());

        conversation.submit(SUGGESTED_QUESTIONS[0]);
        assert!(!conversation.shows_suggestions());
        assert!(!Conversation::new().shows_suggestions());
    }

    #[test]
    fn test_submit_trims_and_blocks_while_pending() {
        let mut conversation = Conversation::new();
        assert_eq!(conversation.submit("   "), None);
        assert!(conversation.is_empty());

        let query = conversation.submit("  how much to save?  ").unwrap();
        assert_eq!(query.query, "how much to save?");
        assert!(conversation.is_pending());
        assert_eq!(conversation.submit("another"), None);
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn test_receive_reply() {
        let mut conversation = Conversation::new();
        conversation.submit("budget?");
        conversation.receive::<String>(Ok(reply("Try **50/30/20**.")));
        assert!(!conversation.is_pending());
        let last = conversation.last().unwrap();
        assert_eq!(last.role(), Role::Assistant);
        assert_eq!(last.content(), "Try **50/30/20**.");
    }

    #[test]
    fn test_failure_appends_apology() {
        let mut conversation = Conversation::new();
        conversation.submit("budget?");
        conversation.receive(Err("timeout"));
        assert_eq!(conversation.last().unwrap().content(), FAILURE_REPLY);

        conversation.submit("again?");
        conversation.receive::<String>(Ok(reply("")));
        assert_eq!(conversation.last().unwrap().content(), FAILURE_REPLY);
        assert_eq!(conversation.len(), 4);
    }

    #[test]
    fn test_json_transcript() {
        let json = r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"- a"}]"#;
        let conversation = Conversation::from_json(json).unwrap();
        assert_eq!(conversation.messages()[0].role(), Role::User);
        let back = Conversation::from_json(&conversation.to_json().unwrap()).unwrap();
        assert_eq!(back, conversation);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!(Conversation::from_json(r#"[{"role":"system","content":"x"}]"#).is_err());
    }

    #[test]
    fn test_render_transcript_escapes_user_text() {
        let mut conversation = Conversation::new();
        conversation.push_user("**not bold** <i>");
        conversation.push_assistant("**bold**");
        let config = RenderConfig::new().with_html(
            HtmlConfig::new().with_classes(false).with_container(false),
        );
        let html = render_transcript(&conversation, None, &config);
        assert_eq!(
            html,
            concat!(
                r#"<div data-role="user"><p>**not bold** &lt;i&gt;</p></div>"#,
                r#"<div data-role="assistant"><p><strong>bold</strong></p></div>"#
            )
        );
    }

    #[test]
    fn test_transcript_text_with_summary() {
        let mut conversation = Conversation::new();
        conversation.push_user("status?");
        conversation.push_assistant("# Doing well\n- keep going");
        let stats = TransactionStats {
            total_income: 100.0,
            total_expense: 40.0,
            balance: 60.0,
            transaction_count: 2,
        };
        assert_eq!(
            transcript_text(&conversation, Some(&stats)),
            "Balance ₹60.00 · Income ₹100.00 · Expenses ₹40.00\n\nYou: status?\n\nAdvisor:\nDoing well\n\n• keep going"
        );
    }
}
