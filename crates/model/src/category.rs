use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A read-only question grouping. The catalog owns its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i32,
    /// Display name shown to browsing clients.
    pub name: String,
}
