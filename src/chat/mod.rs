//! The assistant chat surface: conversation state, API records and the
//! rupee formatting used in its summary strip.

pub mod conversation;
pub mod currency;
pub mod records;

pub use conversation::{render_transcript, transcript_text, Conversation, Message, Role};
pub use currency::{format_inr, summary_line};
pub use records::{decode, AdviceQuery, AdviceResponse, RecordError, TransactionStats, Validate};
