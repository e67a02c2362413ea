//! Case-insensitive substring filter over a note list.
//!
//! # Invariants
//! - Views never mutate the list or touch storage.
//! - Hits keep original list order and report the note's position in the
//!   full list, not in the filtered view.
//! - A blank query (empty string) matches every note.

use crate::model::note::Note;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Lazy, restartable view of the notes matching one query.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    notes: &'a [Note],
    needle: String,
}

/// One note matched by a [`SearchView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// Position in the full list; valid for edit/delete.
    pub index: usize,
    pub note: &'a Note,
}

impl<'a> SearchView<'a> {
    pub fn new(notes: &'a [Note], query: &str) -> Self {
        Self {
            notes,
            needle: query.to_lowercase(),
        }
    }

    /// Starts a fresh pass over the matches.
    pub fn iter(&self) -> SearchIter<'a, '_> {
        SearchIter {
            inner: self.notes.iter().enumerate(),
            needle: self.needle.as_str(),
        }
    }

    /// Clones the matching notes out of the view.
    pub fn to_notes(&self) -> Vec<Note> {
        self.iter().map(|hit| hit.note.clone()).collect()
    }
}

impl<'a, 'v> IntoIterator for &'v SearchView<'a> {
    type Item = SearchHit<'a>;
    type IntoIter = SearchIter<'a, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`SearchView::iter`].
#[derive(Debug, Clone)]
pub struct SearchIter<'a, 'v> {
    inner: Enumerate<slice::Iter<'a, Note>>,
    needle: &'v str,
}

impl<'a> Iterator for SearchIter<'a, '_> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle;
        self.inner
            .find(|(_, note)| note.matches_lowercase(needle))
            .map(|(index, note)| SearchHit { index, note })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl FusedIterator for SearchIter<'_, '_> {}

/// Filters `notes` by `query`.
pub fn search_notes<'a>(notes: &'a [Note], query: &str) -> SearchView<'a> {
    SearchView::new(notes, query)
}

#[cfg(test)]
mod tests {
    use super::search_notes;
    use crate::model::note::Note;

    fn sample() -> Vec<Note> {
        vec![
            Note::new("Groceries", "milk"),
            Note::new("Work", "Quarterly report"),
            Note::new("Ideas", "grow tomatoes"),
        ]
    }

    #[test]
    fn empty_query_returns_full_list_in_order() {
        let notes = sample();
        let view = search_notes(&notes, "");
        assert_eq!(view.to_notes(), notes);
    }

    #[test]
    fn hits_report_positions_in_full_list() {
        let notes = sample();
        let indexes: Vec<usize> = search_notes(&notes, "GRO").iter().map(|hit| hit.index).collect();
        assert_eq!(indexes, vec![0, 2]);
    }

    #[test]
    fn view_can_be_iterated_more_than_once() {
        let notes = sample();
        let view = search_notes(&notes, "report");
        assert_eq!(view.iter().count(), 1);
        assert_eq!((&view).into_iter().count(), 1);
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let notes = vec![Note::new("a b", ""), Note::new("ab", "")];
        let hits: Vec<usize> = search_notes(&notes, " ").iter().map(|hit| hit.index).collect();
        assert_eq!(hits, vec![0]);
    }
}
