//! Feedback wire types
//!
//! End-user feedback rides a plain HTTP POST to `<endpoint>/feedback`,
//! independent of any span lifecycle. The record is constructed, sent, and
//! discarded; nothing is persisted locally.

use serde::{Deserialize, Serialize};

/// Kind of end-user feedback attached to a conversation thread.
///
/// The meaning of the accompanying value depends on the variant: an emoji
/// code, a thumbs up/down marker, or a numeric scale rendered as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedbackType {
    Emoji,
    Thumbs,
    Scale,
}

/// Request body POSTed to `<endpoint>/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub application_ref: String,
    pub thread_id: String,
    pub enduser_id: String,
    pub feedback_type: FeedbackType,
    pub feedback_value: String,
}
