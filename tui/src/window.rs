//! The rows visible on the screen.

use ecaview_lib::{Generator, Row, RuleTable};
use std::collections::VecDeque;

/// A sliding window over the latest rows of a generator.
///
/// Advancing the window pulls one row from the generator
/// and drops the oldest one.
pub(crate) struct RowWindow {
    gen: Generator,
    /// Oldest row first.
    rows: VecDeque<Row>,
    /// Maximal number of rows.
    height: usize,
}

impl RowWindow {
    /// Fills a window of `height` rows from the generator.
    pub(crate) fn new(mut gen: Generator, height: usize) -> Self {
        let rows = gen.by_ref().take(height).collect();
        RowWindow { gen, rows, height }
    }

    /// Shows the next row.
    pub(crate) fn advance(&mut self) {
        if self.height == 0 {
            return;
        }
        if let Some(row) = self.gen.next() {
            if self.rows.len() == self.height {
                self.rows.pop_front();
            }
            self.rows.push_back(row);
        }
    }

    /// The visible rows, oldest first.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// The generation of the newest row.
    pub(crate) fn generation(&self) -> u64 {
        self.gen.generation().unwrap_or_default()
    }

    pub(crate) fn rule(&self) -> &RuleTable {
        self.gen.rule()
    }
}
