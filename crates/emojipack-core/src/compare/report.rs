//! Comparison result aggregator.

use crate::compare::emoji::compare_emojis;
use crate::compare::keyword::compare_keywords;
use crate::compare::model::PackComparison;
use crate::errors::Result;
use crate::model::SnippetPack;

/// Run both comparators over the same pair of packs
///
/// # Errors
///
/// - `DuplicateKeyword` — propagated from [`compare_keywords`]; no partial
///   report is returned
pub fn compare_packs(theirs: &SnippetPack, mine: &SnippetPack) -> Result<PackComparison> {
    let keywords = compare_keywords(theirs, mine)?;
    let emojis = compare_emojis(theirs, mine);
    Ok(PackComparison { emojis, keywords })
}
