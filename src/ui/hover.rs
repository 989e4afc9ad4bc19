//! Hover-pairing between code snippets and their explanation panel.

use std::ptr;

use serde::Serialize;

/// Text shown in the explanation panel while no snippet is focused.
pub const PLACEHOLDER: &str = "Hover over the code blocks to see detailed explanations here.";

/// One annotated block of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnippetRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub code: &'static str,
    pub explanation: &'static str,
}

/// Position of a record in the viewer it came from.
///
/// Only handed out by [`HoverPairViewer`]. The key remembers the record it
/// points at, so a key from another viewer is caught even when both sequences
/// have the same length.
#[derive(Debug, Clone, Copy)]
pub struct SnippetKey {
    index: usize,
    record: &'static SnippetRecord,
}

impl PartialEq for SnippetKey {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(self.record, other.record)
    }
}

impl Eq for SnippetKey {}

/// Record plus its focus flag, in render order.
#[derive(Debug, Serialize)]
pub struct SnippetEntry<'a> {
    #[serde(flatten)]
    pub record: &'a SnippetRecord,
    pub focused: bool,
}

#[derive(Debug, Clone)]
pub struct HoverPairViewer {
    records: &'static [SnippetRecord],
    focus: Option<SnippetKey>,
}

impl HoverPairViewer {
    pub fn new(records: &'static [SnippetRecord]) -> Self {
        debug_assert!(
            records
                .iter()
                .enumerate()
                .all(|(i, r)| records[..i].iter().all(|other| other.id != r.id)),
            "snippet ids must be unique"
        );
        Self {
            records,
            focus: None,
        }
    }

    /// Records with their keys, in input order.
    pub fn keys(&self) -> impl Iterator<Item = (SnippetKey, &'static SnippetRecord)> {
        let records = self.records;
        records
            .iter()
            .enumerate()
            .map(|(index, record)| (SnippetKey { index, record }, record))
    }

    /// Records with their focus flag, in input order.
    pub fn entries(&self) -> Vec<SnippetEntry<'static>> {
        self.keys()
            .map(|(key, record)| SnippetEntry {
                record,
                focused: self.is_focused(key),
            })
            .collect()
    }

    /// Resolve an external id, e.g. from a query string.
    pub fn key_of(&self, id: &str) -> Option<SnippetKey> {
        self.keys()
            .find(|(_, record)| record.id == id)
            .map(|(key, _)| key)
    }

    /// Move focus to `key`, replacing any previous focus.
    ///
    /// # Panics
    ///
    /// If `key` was issued by a viewer over another sequence.
    pub fn focus(&mut self, key: SnippetKey) {
        let owned = self
            .records
            .get(key.index)
            .is_some_and(|record| ptr::eq(record, key.record));
        assert!(
            owned,
            "snippet key {} ({}) does not belong to this viewer",
            key.index, key.record.id
        );
        self.focus = Some(key);
    }

    pub fn unfocus(&mut self) {
        self.focus = None;
    }

    pub fn focused(&self) -> Option<&'static SnippetRecord> {
        self.focus.map(|key| key.record)
    }

    pub fn is_focused(&self, key: SnippetKey) -> bool {
        self.focus == Some(key)
    }

    /// Explanation of the focused record, or [`PLACEHOLDER`].
    pub fn current_explanation(&self) -> &'static str {
        self.focused()
            .map(|record| record.explanation)
            .unwrap_or(PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TERRAFORM_BLOCKS;

    static PAIR: &[SnippetRecord] = &[
        SnippetRecord {
            id: "a",
            title: "A",
            code: "a = 1",
            explanation: "first",
        },
        SnippetRecord {
            id: "b",
            title: "B",
            code: "b = 2",
            explanation: "second",
        },
    ];

    #[test]
    fn test_placeholder_when_nothing_focused() {
        let viewer = HoverPairViewer::new(TERRAFORM_BLOCKS);
        assert_eq!(viewer.current_explanation(), PLACEHOLDER);
        assert!(viewer.focused().is_none());
    }

    #[test]
    fn test_focus_shows_explanation_for_every_record() {
        let mut viewer = HoverPairViewer::new(TERRAFORM_BLOCKS);
        for record in TERRAFORM_BLOCKS {
            let key = viewer.key_of(record.id).unwrap();
            viewer.focus(key);
            assert_eq!(viewer.current_explanation(), record.explanation);

            viewer.unfocus();
            assert_eq!(viewer.current_explanation(), PLACEHOLDER);
        }
    }

    #[test]
    fn test_last_focus_wins() {
        let mut viewer = HoverPairViewer::new(PAIR);
        let a = viewer.key_of("a").unwrap();
        let b = viewer.key_of("b").unwrap();

        viewer.focus(a);
        viewer.focus(b);
        assert!(viewer.is_focused(b));
        assert!(!viewer.is_focused(a));
        assert_eq!(viewer.current_explanation(), "second");

        let flags: Vec<bool> = viewer.entries().iter().map(|e| e.focused).collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn test_unfocus_is_idempotent() {
        let mut viewer = HoverPairViewer::new(PAIR);
        viewer.focus(viewer.key_of("a").unwrap());

        viewer.unfocus();
        let once = viewer.focused();
        viewer.unfocus();
        assert_eq!(viewer.focused(), once);
        assert_eq!(viewer.current_explanation(), PLACEHOLDER);
    }

    #[test]
    fn test_entries_keep_input_order() {
        let viewer = HoverPairViewer::new(TERRAFORM_BLOCKS);
        let ids: Vec<&str> = viewer.entries().iter().map(|e| e.record.id).collect();
        let expected: Vec<&str> = TERRAFORM_BLOCKS.iter().map(|r| r.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_unknown_id_has_no_key() {
        let viewer = HoverPairViewer::new(PAIR);
        assert!(viewer.key_of("missing").is_none());
    }

    static OTHER_PAIR: &[SnippetRecord] = &[
        SnippetRecord {
            id: "x",
            title: "X",
            code: "x = 1",
            explanation: "other first",
        },
        SnippetRecord {
            id: "y",
            title: "Y",
            code: "y = 2",
            explanation: "other second",
        },
    ];

    #[test]
    #[should_panic(expected = "does not belong to this viewer")]
    fn test_foreign_key_fails_fast() {
        let long = HoverPairViewer::new(TERRAFORM_BLOCKS);
        let key = long.key_of("frontend_instance").unwrap();

        let mut short = HoverPairViewer::new(PAIR);
        short.focus(key);
    }

    #[test]
    #[should_panic(expected = "does not belong to this viewer")]
    fn test_foreign_key_of_same_length_fails_fast() {
        let other = HoverPairViewer::new(OTHER_PAIR);
        let key = other.key_of("x").unwrap();

        let mut viewer = HoverPairViewer::new(PAIR);
        viewer.focus(key);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let mut viewer = HoverPairViewer::new(PAIR);
        viewer.focus(viewer.key_of("a").unwrap());
        let json = serde_json::to_value(viewer.entries()).unwrap();
        assert_eq!(json[0]["id"], "a");
        assert_eq!(json[0]["focused"], true);
        assert_eq!(json[1]["focused"], false);
    }
}
