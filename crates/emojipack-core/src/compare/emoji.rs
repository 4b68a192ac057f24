//! Emoji comparator: classifies payloads of two packs.

use crate::compare::model::{EmojiComparison, EmojiMatch};
use crate::model::{Snippet, SnippetPack};
use crate::normalize::{strip_spaces, with_emoji_presentation};
use crate::{log_op_end, log_op_start};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::time::Instant;

type ByEmoji<'a> = IndexMap<&'a str, Vec<&'a Snippet>>;

/// Group non-comment snippets by exact payload, keeping first-seen order.
fn group_by_emoji(pack: &SnippetPack) -> ByEmoji<'_> {
    let mut grouped: ByEmoji<'_> = IndexMap::new();
    for snippet in pack.active_snippets() {
        grouped
            .entry(snippet.snippet.as_str())
            .or_default()
            .push(snippet);
    }
    grouped
}

fn owned(snippets: &[&Snippet]) -> Vec<Snippet> {
    snippets.iter().map(|s| (*s).clone()).collect()
}

/// How a reference payload was matched against the candidate pack
enum Claim<'a> {
    Found(&'a str),
    AddedEmojiPresentation(&'a str),
    RemovedSpace(&'a str),
}

/// Find the candidate payload a reference payload corresponds to.
///
/// Checks run in fixed priority: exact, presentation selector, space removal.
fn claim<'a>(emoji: &str, mine: &ByEmoji<'a>) -> Option<Claim<'a>> {
    if let Some((key, _)) = mine.get_key_value(emoji) {
        return Some(Claim::Found(*key));
    }
    let presented = with_emoji_presentation(emoji);
    if presented != emoji {
        if let Some((key, _)) = mine.get_key_value(presented.as_str()) {
            return Some(Claim::AddedEmojiPresentation(*key));
        }
    }
    let stripped = strip_spaces(emoji);
    if stripped != emoji {
        if let Some((key, _)) = mine.get_key_value(stripped.as_str()) {
            return Some(Claim::RemovedSpace(*key));
        }
    }
    None
}

/// Compare two packs by snippet payload
///
/// Walks the reference payloads in pack order and classifies each as
/// `found`, `added_emoji_presentation`, `removed_space` or `removed`.
/// Candidate payloads never claimed by a match become `added`. Each entry
/// carries every record sharing the payload, so synonyms stay together.
pub fn compare_emojis(theirs: &SnippetPack, mine: &SnippetPack) -> EmojiComparison {
    let start = Instant::now();
    log_op_start!(
        "compare_emojis",
        theirs_count = theirs.snippets.len(),
        mine_count = mine.snippets.len()
    );

    let theirs_by_emoji = group_by_emoji(theirs);
    let mine_by_emoji = group_by_emoji(mine);

    let mut result = EmojiComparison::default();
    let mut claimed: HashSet<&str> = HashSet::new();

    for (emoji, theirs_snippets) in &theirs_by_emoji {
        match claim(emoji, &mine_by_emoji) {
            Some(Claim::Found(key)) => {
                claimed.insert(key);
                result.found.insert(
                    key.to_string(),
                    EmojiMatch {
                        theirs: owned(theirs_snippets),
                        mine: owned(&mine_by_emoji[key]),
                    },
                );
            }
            Some(Claim::AddedEmojiPresentation(key)) => {
                claimed.insert(key);
                result.added_emoji_presentation.insert(
                    key.to_string(),
                    EmojiMatch {
                        theirs: owned(theirs_snippets),
                        mine: owned(&mine_by_emoji[key]),
                    },
                );
            }
            Some(Claim::RemovedSpace(key)) => {
                claimed.insert(key);
                result.removed_space.insert(
                    emoji.to_string(),
                    EmojiMatch {
                        theirs: owned(theirs_snippets),
                        mine: owned(&mine_by_emoji[key]),
                    },
                );
            }
            None => {
                result
                    .removed
                    .insert(emoji.to_string(), owned(theirs_snippets));
            }
        }
    }

    for (emoji, mine_snippets) in &mine_by_emoji {
        if !claimed.contains(emoji) {
            result.added.insert(emoji.to_string(), owned(mine_snippets));
        }
    }

    log_op_end!(
        "compare_emojis",
        duration_ms = start.elapsed().as_millis() as u64,
        found = result.found.len(),
        added_emoji_presentation = result.added_emoji_presentation.len(),
        removed_space = result.removed_space.len(),
        removed = result.removed.len(),
        added = result.added.len()
    );
    result
}
