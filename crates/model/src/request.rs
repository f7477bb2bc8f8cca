use alloc::{string::String, vec::Vec};
use serde::Deserialize;

/// Acceptable schema for search requests.
#[derive(Deserialize)]
pub struct SearchRequest {
    /// Substring to look for within question text. May be empty.
    #[serde(rename = "searchTerm")]
    pub term: String,
}

/// Category scope selected by a quiz player.
#[derive(Deserialize)]
pub struct QuizCategory {
    /// Either a category name or the literal `"click"` for the All scope.
    #[serde(rename = "type")]
    pub kind: String,
    /// Category identifier; `0` under the All scope.
    pub id: i32,
}

/// Acceptable schema for quiz requests.
#[derive(Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Identifiers of questions already served this session.
    pub previous_questions: Vec<i32>,
}
