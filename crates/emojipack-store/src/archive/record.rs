//! JSON shape of one snippet entry.

use emojipack_core::Snippet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnippetDocument {
    pub alfredsnippet: SnippetRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnippetRecord {
    pub keyword: String,
    pub name: String,
    pub snippet: String,
    pub uid: String,
    #[serde(default)]
    pub dontautoexpand: bool,
}

impl From<&Snippet> for SnippetDocument {
    fn from(snippet: &Snippet) -> Self {
        Self {
            alfredsnippet: SnippetRecord {
                keyword: snippet.keyword.clone(),
                name: snippet.name.clone(),
                snippet: snippet.snippet.clone(),
                uid: snippet.uid.clone(),
                dontautoexpand: false,
            },
        }
    }
}

impl From<SnippetDocument> for Snippet {
    fn from(doc: SnippetDocument) -> Self {
        let r = doc.alfredsnippet;
        Snippet::new(r.keyword, r.name, r.snippet, r.uid)
    }
}
