//! Keyword comparator scenarios.

use emojipack_core::compare::{compare_keywords, KeywordComparison, KeywordMatch};
use emojipack_core::errors::{EmojiPackError, ExError, ExErrorKind};
use emojipack_core::{PackSide, Snippet, SnippetPack};
use indexmap::IndexMap;

fn map<V: Clone>(entries: &[(&str, V)]) -> IndexMap<String, V> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_matching_keywords_after_colon_trimming() {
    let theirs = vec![
        Snippet::new(":heart:", "❤️ Heart", "❤️", "h1"),
        Snippet::new(":love:", "❤️ Heart", "❤️", "h2"),
    ];
    let mine = vec![
        Snippet::new("heart", "❤️ Heart", "❤️", "h3"),
        Snippet::new("love", "❤️ Heart", "❤️", "h4"),
    ];

    let result = compare_keywords(
        &SnippetPack::new("", "", theirs),
        &SnippetPack::new(":", ":", mine.clone()),
    )
    .unwrap();

    assert_eq!(
        result,
        KeywordComparison {
            matching: map(&[("heart", mine[0].clone()), ("love", mine[1].clone())]),
            ..Default::default()
        }
    );
}

#[test]
fn test_added_and_removed_keywords() {
    let theirs = vec![
        Snippet::new(":heart:", "❤️ Heart", "❤️", "h1"),
        Snippet::new(":love:", "❤️ Heart", "❤️", "h2"),
    ];
    let mine = vec![
        Snippet::new("heart", "❤️ Heart", "❤️", "h3"),
        Snippet::new("red", "❤️ Heart", "❤️", "h4"),
    ];

    let result = compare_keywords(
        &SnippetPack::new("", "", theirs.clone()),
        &SnippetPack::new("", "", mine.clone()),
    )
    .unwrap();

    assert_eq!(
        result,
        KeywordComparison {
            matching: map(&[("heart", mine[0].clone())]),
            removed: map(&[("love", theirs[1].clone())]),
            added: map(&[("red", mine[1].clone())]),
            modified: IndexMap::new(),
        }
    );
}

#[test]
fn test_modified_keyword_carries_both_records() {
    let theirs = Snippet::new(":heart:", "❤️ Heart", "❤️", "h1");
    let mine = Snippet::new("heart", "❤️ Heart", "💙", "h2");

    let result = compare_keywords(
        &SnippetPack::new("", "", vec![theirs.clone()]),
        &SnippetPack::new("", "", vec![mine.clone()]),
    )
    .unwrap();

    assert_eq!(
        result,
        KeywordComparison {
            modified: map(&[("heart", KeywordMatch { theirs, mine })]),
            ..Default::default()
        }
    );
}

#[test]
fn test_matching_after_payload_normalization() {
    let theirs = Snippet::new(":heart:", "❤️ Heart", "\u{2764} ", "h1");
    let mine = Snippet::new("heart", "❤️ Heart", "\u{2764}\u{fe0f}", "h2");

    let result = compare_keywords(
        &SnippetPack::new("", "", vec![theirs]),
        &SnippetPack::new("", "", vec![mine.clone()]),
    )
    .unwrap();

    assert_eq!(result.matching, map(&[("heart", mine)]));
    assert!(result.modified.is_empty());
}

#[test]
fn test_keycap_payloads_match_after_normalization() {
    let theirs = Snippet::new("1", "1⃣", "1\u{20e3}", "k1");
    let mine = Snippet::new("1", "1️⃣", "1\u{fe0f}\u{20e3}", "k2");

    let result = compare_keywords(
        &SnippetPack::new("", "", vec![theirs]),
        &SnippetPack::new("", "", vec![mine]),
    )
    .unwrap();

    assert!(result.matching.contains_key("1"));
}

#[test]
fn test_comment_records_are_ignored() {
    let theirs = vec![
        Snippet::new("dup", "# note", "📝", "c1"),
        Snippet::new("dup", "# another note", "📝", "c2"),
    ];
    let mine = vec![Snippet::new("todo", "# todo", "📝", "c3")];

    let result = compare_keywords(
        &SnippetPack::new("", "", theirs),
        &SnippetPack::new("", "", mine),
    )
    .unwrap();

    assert_eq!(result, KeywordComparison::default());
}

#[test]
fn test_duplicate_keyword_in_candidate_fails_fast() {
    let mine = vec![
        Snippet::new("dup", "🎉 Tada", "🎉", "d1"),
        Snippet::new("dup", "🎉 Tada", "🎉", "d2"),
    ];

    let err = compare_keywords(&SnippetPack::default(), &SnippetPack::new("", "", mine))
        .unwrap_err();

    assert_eq!(
        err,
        EmojiPackError::DuplicateKeyword {
            keyword: "dup".to_string(),
            side: PackSide::Mine,
        }
    );
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::DuplicateKeyword);
    assert_eq!(ex.subject(), Some("dup"));
    assert_eq!(ex.side(), Some(PackSide::Mine));
}

#[test]
fn test_duplicate_keyword_in_reference_fails_fast() {
    let theirs = vec![
        Snippet::new(":dup:", "🎉 Tada", "🎉", "d1"),
        Snippet::new(":dup:", "🎊 Confetti", "🎊", "d2"),
    ];

    let err = compare_keywords(&SnippetPack::new("", "", theirs), &SnippetPack::default())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Duplicate keyword 'dup' in theirs pack"
    );
}
