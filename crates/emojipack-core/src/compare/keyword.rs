//! Keyword comparator: classifies keywords of two packs.

use crate::compare::model::{KeywordComparison, KeywordMatch};
use crate::errors::{EmojiPackError, Result};
use crate::model::{PackSide, Snippet, SnippetPack};
use crate::normalize::normalize_emoji;
use crate::{log_op_end, log_op_error, log_op_start};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::time::Instant;

/// Keyword as stored by the reference pack, with `:` delimiters removed.
///
/// Only the reference side is trimmed: reference packs may persist keywords
/// with their prefix/suffix embedded, candidate packs store them bare.
fn reference_keyword(keyword: &str) -> &str {
    keyword.trim_matches(':')
}

/// Candidate keywords are compared as stored.
fn candidate_keyword(keyword: &str) -> &str {
    keyword
}

/// Index non-comment snippets by keyword, rejecting a keyword bound twice.
fn index_by_keyword<'a>(
    pack: &'a SnippetPack,
    side: PackSide,
    keyword_of: fn(&str) -> &str,
) -> Result<IndexMap<&'a str, &'a Snippet>> {
    let mut indexed = IndexMap::new();
    for snippet in pack.active_snippets() {
        match indexed.entry(keyword_of(&snippet.keyword)) {
            Entry::Occupied(entry) => {
                return Err(EmojiPackError::DuplicateKeyword {
                    keyword: (*entry.key()).to_string(),
                    side,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(snippet);
            }
        }
    }
    Ok(indexed)
}

/// Compare two packs by keyword
///
/// Keywords in both packs are `matching` when their payloads agree after
/// [`normalize_emoji`], otherwise `modified`. Keywords only in the reference
/// pack are `removed`, keywords only in the candidate pack are `added`.
///
/// # Errors
///
/// - `DuplicateKeyword` — either pack binds one keyword (after `:` trimming
///   on the reference side) to more than one snippet
pub fn compare_keywords(theirs: &SnippetPack, mine: &SnippetPack) -> Result<KeywordComparison> {
    let start = Instant::now();
    log_op_start!(
        "compare_keywords",
        theirs_count = theirs.snippets.len(),
        mine_count = mine.snippets.len()
    );

    let indexed = index_by_keyword(theirs, PackSide::Theirs, reference_keyword).and_then(
        |theirs_by_keyword| {
            let mine_by_keyword = index_by_keyword(mine, PackSide::Mine, candidate_keyword)?;
            Ok((theirs_by_keyword, mine_by_keyword))
        },
    );
    let (theirs_by_keyword, mine_by_keyword) = match indexed {
        Ok(pair) => pair,
        Err(err) => {
            log_op_error!(
                "compare_keywords",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    let mut result = KeywordComparison::default();
    for (keyword, theirs_snippet) in &theirs_by_keyword {
        match mine_by_keyword.get(keyword) {
            Some(mine_snippet) => {
                if normalize_emoji(&theirs_snippet.snippet) == normalize_emoji(&mine_snippet.snippet)
                {
                    result
                        .matching
                        .insert(keyword.to_string(), (*mine_snippet).clone());
                } else {
                    result.modified.insert(
                        keyword.to_string(),
                        KeywordMatch {
                            theirs: (*theirs_snippet).clone(),
                            mine: (*mine_snippet).clone(),
                        },
                    );
                }
            }
            None => {
                result
                    .removed
                    .insert(keyword.to_string(), (*theirs_snippet).clone());
            }
        }
    }
    for (keyword, mine_snippet) in &mine_by_keyword {
        if !theirs_by_keyword.contains_key(keyword) {
            result
                .added
                .insert(keyword.to_string(), (*mine_snippet).clone());
        }
    }

    log_op_end!(
        "compare_keywords",
        duration_ms = start.elapsed().as_millis() as u64,
        matching = result.matching.len(),
        modified = result.modified.len(),
        removed = result.removed.len(),
        added = result.added.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_keyword_trims_colons() {
        assert_eq!(reference_keyword(":heart:"), "heart");
        assert_eq!(reference_keyword("::heart"), "heart");
        assert_eq!(reference_keyword("heart"), "heart");
        assert_eq!(reference_keyword("a:b"), "a:b");
    }

    #[test]
    fn test_candidate_keywords_are_not_trimmed() {
        let theirs = SnippetPack::new("", "", vec![Snippet::new(":heart:", "❤️", "❤️", "1")]);
        let mine = SnippetPack::new("", "", vec![Snippet::new(":heart:", "❤️", "❤️", "2")]);
        let result = compare_keywords(&theirs, &mine).unwrap();
        assert!(result.matching.is_empty());
        assert!(result.removed.contains_key("heart"));
        assert!(result.added.contains_key(":heart:"));
    }

    #[test]
    fn test_trimmed_reference_keywords_can_collide() {
        let theirs = SnippetPack::new(
            "",
            "",
            vec![
                Snippet::new(":heart:", "❤️", "❤️", "1"),
                Snippet::new("heart", "💙", "💙", "2"),
            ],
        );
        let err = compare_keywords(&theirs, &SnippetPack::default()).unwrap_err();
        assert_eq!(
            err,
            EmojiPackError::DuplicateKeyword {
                keyword: "heart".to_string(),
                side: PackSide::Theirs,
            }
        );
    }
}
