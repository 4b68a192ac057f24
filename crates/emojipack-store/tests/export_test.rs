// Integration tests for the macOS text replacement export

use emojipack_core::{MacosShortcut, Snippet, SnippetPack};
use emojipack_store::write_macos_plist;
use tempfile::TempDir;

#[test]
fn test_macos_plist_lists_shortcuts_in_order() {
    // Given: A pack with a spaced keyword and a comment record
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("Snippet Pack.plist");
    let pack = SnippetPack::new(
        ":",
        ":",
        vec![
            Snippet::new("smiley", "😃 Smiley", "😃", "1"),
            Snippet::new("# section", "# Faces", "", "2"),
            Snippet::new("thumbs up", "👍 Thumbs up", "👍", "3"),
        ],
    );

    // When: It is exported
    write_macos_plist(&pack, &path).unwrap();

    // Then: The plist holds one entry per non-comment snippet
    let shortcuts: Vec<MacosShortcut> = plist::from_file(&path).unwrap();
    assert_eq!(
        shortcuts,
        vec![
            MacosShortcut {
                phrase: "😃".to_string(),
                shortcut: ":smiley:".to_string(),
            },
            MacosShortcut {
                phrase: "👍".to_string(),
                shortcut: ":thumbs-up:".to_string(),
            },
        ]
    );
}

#[test]
fn test_empty_pack_exports_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.plist");

    write_macos_plist(&SnippetPack::default(), &path).unwrap();

    let shortcuts: Vec<MacosShortcut> = plist::from_file(&path).unwrap();
    assert!(shortcuts.is_empty());
}
