use serde::{Deserialize, Serialize};
use std::fmt;

/// Local ordinal of a journal story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub u32);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editorial entry in "The Journal"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    /// Short label; the view renders it upper-case
    pub category: String,
    pub title: String,
    pub image: String,
}

impl Story {
    pub fn category_label(&self) -> String {
        self.category.to_uppercase()
    }
}
