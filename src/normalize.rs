use tracing::debug;

use crate::error::{CleanerError, Result};
use crate::types::{Card, TagCategory};

/// Tag values that send a card to the trash category.
pub const TRASH_MARKERS: [&str; 2] = ["trash", "politic"];

/// Counts from one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    pub total: usize,
    pub trash: usize,
    pub soft: usize,
}

/// Classifies a single card from its current tag content.
///
/// Any tag equal to one of [`TRASH_MARKERS`] (exact, case-sensitive
/// match) makes the card trash; everything else, including an empty
/// or absent tag list, is soft.
pub fn classify(card: &Card) -> std::result::Result<TagCategory, String> {
    match card.tags()? {
        Some(tags) if tags.iter().any(|tag| TRASH_MARKERS.contains(tag)) => {
            Ok(TagCategory::Trash)
        }
        _ => Ok(TagCategory::Soft),
    }
}

/// Normalizes every card's `tags` field into `["trash"]` or `["soft"]`.
///
/// Pure function of the input: no I/O, order and length preserved,
/// all non-`tags` attributes passed through unchanged.
pub fn normalize(mut cards: Vec<Card>) -> Result<(Vec<Card>, CleanSummary)> {
    let mut summary = CleanSummary {
        total: cards.len(),
        trash: 0,
        soft: 0,
    };

    for (index, card) in cards.iter_mut().enumerate() {
        let category =
            classify(card).map_err(|reason| CleanerError::MalformedRecord { index, reason })?;
        debug!(index, category = category.as_str(), "classified card");
        match category {
            TagCategory::Trash => summary.trash += 1,
            TagCategory::Soft => summary.soft += 1,
        }
        card.set_tags(category);
    }

    Ok((cards, summary))
}
