use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One catalog card: an open bag of attributes, of which only the
/// optional `tags` list is ever interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Card(pub Map<String, Value>);

/// The two categories a card's tags collapse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Trash,
    Soft,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Trash => "trash",
            TagCategory::Soft => "soft",
        }
    }
}

impl Card {
    /// Returns the card's tag list, or `None` when the `tags` key is absent.
    ///
    /// A present `tags` value that is not an array of strings is reported
    /// as an error with a human-readable reason; the caller attaches the
    /// record index.
    pub fn tags(&self) -> Result<Option<Vec<&str>>, String> {
        match self.0.get("tags") {
            None => Ok(None),
            Some(Value::Array(items)) => {
                let mut tags = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(tag) => tags.push(tag),
                        None => return Err("tags contains a non-string element".to_string()),
                    }
                }
                Ok(Some(tags))
            }
            Some(_) => Err("tags is not an array".to_string()),
        }
    }

    /// Replaces the `tags` field with the single-element list for `category`.
    /// All other attributes are left untouched.
    pub fn set_tags(&mut self, category: TagCategory) {
        self.0
            .insert("tags".to_string(), json!([category.as_str()]));
    }
}
