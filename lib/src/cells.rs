//! Cells, neighborhood patterns and rows.

use crate::error::Error;
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter, Write},
    ops::{Deref, Not},
    str::FromStr,
};

/// The state of a cell.
///
/// An elementary cellular automaton only has two states, [`DEAD`] and [`ALIVE`].
/// The inner value is private, so no other state can be constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub(crate) u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

impl State {
    /// Whether the cell is [`ALIVE`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }

    /// The state as a binary digit, `0` or `1`.
    #[inline]
    pub fn digit(self) -> u8 {
        self.0
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        State(alive as u8)
    }
}

impl TryFrom<u8> for State {
    type Error = Error;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        match digit {
            0 => Ok(DEAD),
            1 => Ok(ALIVE),
            _ => Err(Error::InvalidState(digit)),
        }
    }
}

/// A neighborhood: the states of the left neighbor, the cell itself,
/// and the right neighbor.
///
/// There are exactly 8 of them, see [`Pattern::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    /// The left neighbor.
    pub left: State,
    /// The cell itself.
    pub center: State,
    /// The right neighbor.
    pub right: State,
}

impl Pattern {
    /// All 8 patterns, in the canonical order: `000`, `001`, ..., `111`.
    ///
    /// The `i`-th pattern is `i` written as 3 binary digits.
    pub const ALL: [Pattern; 8] = [
        Pattern::from_digits(0, 0, 0),
        Pattern::from_digits(0, 0, 1),
        Pattern::from_digits(0, 1, 0),
        Pattern::from_digits(0, 1, 1),
        Pattern::from_digits(1, 0, 0),
        Pattern::from_digits(1, 0, 1),
        Pattern::from_digits(1, 1, 0),
        Pattern::from_digits(1, 1, 1),
    ];

    /// Constructs a pattern from three states.
    #[inline]
    pub fn new(left: State, center: State, right: State) -> Self {
        Pattern {
            left,
            center,
            right,
        }
    }

    const fn from_digits(left: u8, center: u8, right: u8) -> Self {
        Pattern {
            left: State(left),
            center: State(center),
            right: State(right),
        }
    }

    /// The pattern whose binary digits spell `index`.
    ///
    /// Returns `None` unless `index < 8`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The value of the pattern read as a 3-digit binary number.
    #[inline]
    pub fn index(self) -> usize {
        (self.left.0 as usize) << 2 | (self.center.0 as usize) << 1 | self.right.0 as usize
    }
}

/// Reads a window of cells as a pattern.
///
/// Fails with [`Error::InvalidPattern`] unless the window has exactly 3 cells.
impl TryFrom<&[State]> for Pattern {
    type Error = Error;

    fn try_from(window: &[State]) -> Result<Self, Self::Error> {
        match *window {
            [left, center, right] => Ok(Pattern::new(left, center, right)),
            _ => Err(Error::InvalidPattern(window.len())),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left.0, self.center.0, self.right.0)
    }
}

/// A generation of the automaton.
///
/// Cells outside the row are always considered [`DEAD`]
/// when computing the next generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Row(Vec<State>);

impl Row {
    /// A row of `width` dead cells.
    pub fn dead(width: usize) -> Self {
        Row(vec![DEAD; width])
    }

    /// A row with a single living cell in the middle.
    ///
    /// The living cell is at position `width / 2`.
    /// An empty row stays empty.
    pub fn center(width: usize) -> Self {
        let mut row = Self::dead(width);
        if let Some(cell) = row.0.get_mut(width / 2) {
            *cell = ALIVE;
        }
        row
    }

    /// A random row where each cell is alive with probability `density`.
    ///
    /// Fails with [`Error::DensityError`] unless `density` is between 0 and 1.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::DensityError(density));
        }
        Ok((0..width).map(|_| State::from(rng.gen_bool(density))).collect())
    }

    /// The cells of the row.
    #[inline]
    pub fn cells(&self) -> &[State] {
        &self.0
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.0.iter().filter(|state| state.is_alive()).count()
    }

    /// Takes the cells out of the row.
    pub fn into_inner(self) -> Vec<State> {
        self.0
    }
}

impl Deref for Row {
    type Target = [State];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<State> for Row {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Row(iter.into_iter().collect())
    }
}

impl From<Vec<bool>> for Row {
    fn from(cells: Vec<bool>) -> Self {
        cells.into_iter().map(State::from).collect()
    }
}

/// Parses a row in a [Plaintext](https://conwaylife.com/wiki/Plaintext)-like
/// format.
///
/// * **Dead** cells are `.` or `0`;
/// * **Living** cells are `o`, `*` or `1`.
///
/// Surrounding whitespace is ignored.
impl FromStr for Row {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .map(|c| match c {
                '.' | '0' => Ok(DEAD),
                'o' | '*' | '1' => Ok(ALIVE),
                _ => Err(Error::ParseRowError(c)),
            })
            .collect()
    }
}

/// Displays the row in Plaintext format: `.` for dead cells, `o` for living cells.
impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for state in self.0.iter() {
            f.write_char(if state.is_alive() { 'o' } else { '.' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn canonical_patterns() {
        for (i, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.index(), i);
            assert_eq!(Pattern::from_index(i), Some(*pattern));
            assert_eq!(pattern.to_string(), format!("{:03b}", i));
        }
        assert_eq!(Pattern::from_index(8), None);
    }

    #[test]
    fn malformed_window() {
        assert_eq!(
            Pattern::try_from(&[ALIVE, DEAD][..]),
            Err(Error::InvalidPattern(2))
        );
        assert_eq!(
            Pattern::try_from(&[ALIVE, DEAD, ALIVE, DEAD][..]),
            Err(Error::InvalidPattern(4))
        );
        assert_eq!(
            Pattern::try_from(&[ALIVE, DEAD, ALIVE][..]),
            Ok(Pattern::new(ALIVE, DEAD, ALIVE))
        );
    }

    #[test]
    fn state_digits() {
        assert_eq!(State::try_from(0), Ok(DEAD));
        assert_eq!(State::try_from(1), Ok(ALIVE));
        assert_eq!(State::try_from(2), Err(Error::InvalidState(2)));
        assert_eq!(!DEAD, ALIVE);
        assert_eq!(!ALIVE, DEAD);
    }

    #[test]
    fn parse_row() -> Result<(), Error> {
        let row: Row = " .o0*1. ".parse()?;
        assert_eq!(row.to_string(), ".o.oo.");
        assert_eq!(row.population(), 3);
        assert_eq!("..x".parse::<Row>(), Err(Error::ParseRowError('x')));
        Ok(())
    }

    #[test]
    fn random_row() -> Result<(), Error> {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Row::random(4, 1.0, &mut rng)?.population(), 4);
        assert_eq!(Row::random(4, 0.0, &mut rng)?.population(), 0);
        assert_eq!(Row::random(0, 0.5, &mut rng)?.len(), 0);
        for density in [1.5, -0.1] {
            assert_eq!(
                Row::random(4, density, &mut rng),
                Err(Error::DensityError(density))
            );
        }
        assert!(matches!(
            Row::random(4, f64::NAN, &mut rng),
            Err(Error::DensityError(d)) if d.is_nan()
        ));
        Ok(())
    }

    #[test]
    fn center_row() {
        assert_eq!(Row::center(5).to_string(), "..o..");
        assert_eq!(Row::center(4).to_string(), "..o.");
        assert!(Row::center(0).is_empty());
    }
}
