//! Human-readable summary renderer for pack comparisons.

use crate::compare::model::{EmojiComparison, EmojiMatch, KeywordComparison, PackComparison};
use crate::model::Snippet;
use crate::normalize::code_points;

/// Render a Markdown/text summary of a [`PackComparison`].
///
/// Counts for every bucket come first; entries are listed for every bucket
/// except the unchanged ones (`found`, `matching`). Payloads whose difference
/// is invisible (selectors, spaces) are shown with their code points.
pub fn render_human_summary(report: &PackComparison) -> String {
    let mut out = String::new();
    out.push_str("## Snippet Pack Comparison\n\n");
    render_emojis(&mut out, &report.emojis);
    render_keywords(&mut out, &report.keywords);
    out
}

fn render_emojis(out: &mut String, emojis: &EmojiComparison) {
    out.push_str("### Emojis\n\n");
    out.push_str(&format!(
        "| Bucket | Count |\n\
         |---|---|\n\
         | Found | {} |\n\
         | Added emoji presentation | {} |\n\
         | Removed space | {} |\n\
         | Removed | {} |\n\
         | Added | {} |\n\n",
        emojis.found.len(),
        emojis.added_emoji_presentation.len(),
        emojis.removed_space.len(),
        emojis.removed.len(),
        emojis.added.len(),
    ));

    if emojis.is_identical() {
        out.push_str("_No emoji differences detected._\n\n");
        return;
    }

    if !emojis.added_emoji_presentation.is_empty() {
        out.push_str("#### Added Emoji Presentation\n\n");
        for (emoji, m) in &emojis.added_emoji_presentation {
            render_match(out, emoji, m);
        }
        out.push('\n');
    }
    if !emojis.removed_space.is_empty() {
        out.push_str("#### Removed Space\n\n");
        for (emoji, m) in &emojis.removed_space {
            render_match(out, emoji, m);
        }
        out.push('\n');
    }
    if !emojis.removed.is_empty() {
        out.push_str("#### Removed\n\n");
        for (emoji, snippets) in &emojis.removed {
            out.push_str(&format!("- {} ({})\n", emoji, keywords(snippets)));
        }
        out.push('\n');
    }
    if !emojis.added.is_empty() {
        out.push_str("#### Added\n\n");
        for (emoji, snippets) in &emojis.added {
            out.push_str(&format!("- {} ({})\n", emoji, keywords(snippets)));
        }
        out.push('\n');
    }
}

fn render_match(out: &mut String, emoji: &str, m: &EmojiMatch) {
    let theirs = m.theirs.first().map(|s| s.snippet.as_str()).unwrap_or(emoji);
    let mine = m.mine.first().map(|s| s.snippet.as_str()).unwrap_or(emoji);
    out.push_str(&format!(
        "- {} `{}` → `{}` (theirs: {}; mine: {})\n",
        emoji,
        code_points(theirs),
        code_points(mine),
        keywords(&m.theirs),
        keywords(&m.mine),
    ));
}

fn render_keywords(out: &mut String, kw: &KeywordComparison) {
    out.push_str("### Keywords\n\n");
    out.push_str(&format!(
        "| Bucket | Count |\n\
         |---|---|\n\
         | Matching | {} |\n\
         | Modified | {} |\n\
         | Removed | {} |\n\
         | Added | {} |\n\n",
        kw.matching.len(),
        kw.modified.len(),
        kw.removed.len(),
        kw.added.len(),
    ));

    if kw.is_identical() {
        out.push_str("_No keyword differences detected._\n");
        return;
    }

    if !kw.modified.is_empty() {
        out.push_str("#### Modified\n\n");
        for (keyword, m) in &kw.modified {
            out.push_str(&format!(
                "- {}: {} → {}\n",
                keyword, m.theirs.snippet, m.mine.snippet
            ));
        }
        out.push('\n');
    }
    if !kw.removed.is_empty() {
        out.push_str("#### Removed\n\n");
        for (keyword, snippet) in &kw.removed {
            out.push_str(&format!("- {}: {}\n", keyword, snippet.snippet));
        }
        out.push('\n');
    }
    if !kw.added.is_empty() {
        out.push_str("#### Added\n\n");
        for (keyword, snippet) in &kw.added {
            out.push_str(&format!("- {}: {}\n", keyword, snippet.snippet));
        }
        out.push('\n');
    }
}

fn keywords(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .map(|s| s.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
