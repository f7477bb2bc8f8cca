use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Acceptable schema for new questions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawQuestion {
    /// Prompt shown to the player.
    pub question: String,
    /// Accepted answer text.
    pub answer: String,
    /// Identifier of the owning category.
    pub category: i32,
    /// Difficulty rating from 1 (easiest) to 5.
    pub difficulty: i16,
}

/// A stored question along with its catalog-assigned identifier.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i32,
    #[serde(flatten)]
    pub raw: RawQuestion,
}
