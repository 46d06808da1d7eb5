//! Generating successive rows.

use crate::{
    cells::{Pattern, Row, DEAD},
    rule::RuleTable,
};
use std::iter::FusedIterator;

/// Computes the next generation of a row.
///
/// Cells beyond both ends of the row are considered dead.
/// The result has the same length as `row`.
pub fn step(table: &RuleTable, row: &Row) -> Row {
    let mut padded = Vec::with_capacity(row.len() + 2);
    padded.push(DEAD);
    padded.extend_from_slice(row);
    padded.push(DEAD);
    padded
        .windows(3)
        .map(|w| table.get(Pattern::new(w[0], w[1], w[2])))
        .collect()
}

/// Starts generating rows from `initial_row`.
///
/// The first row produced is `initial_row` itself.
pub fn generate(table: RuleTable, initial_row: Row) -> Generator {
    Generator::new(table, initial_row)
}

/// An endless iterator of generations.
///
/// Each row is only computed when it is requested,
/// and only the latest row is kept.
#[derive(Clone, Debug)]
pub struct Generator {
    table: RuleTable,
    /// The last row produced, or the initial row if nothing is produced yet.
    row: Row,
    /// The generation of `row`, `None` if nothing is produced yet.
    generation: Option<u64>,
}

impl Generator {
    /// Creates a generator which starts from `initial_row`.
    pub fn new(table: RuleTable, initial_row: Row) -> Self {
        Generator {
            table,
            row: initial_row,
            generation: None,
        }
    }

    /// The rule table in use.
    pub fn rule(&self) -> &RuleTable {
        &self.table
    }

    /// The generation of the last row produced.
    ///
    /// The initial row is generation `0`.
    /// Returns `None` before the first call to `next`.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Width of the rows.
    pub fn width(&self) -> usize {
        self.row.len()
    }
}

impl Iterator for Generator {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        match self.generation {
            None => self.generation = Some(0),
            Some(ref mut generation) => {
                self.row = step(&self.table, &self.row);
                *generation += 1;
            }
        }
        Some(self.row.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generator {}
