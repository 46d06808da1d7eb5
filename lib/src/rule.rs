//! Rule tables of elementary cellular automata.
//!
//! For the numbering of rules, please see
//! [this article on Wolfram MathWorld](https://mathworld.wolfram.com/ElementaryCellularAutomaton.html).

use crate::{
    cells::{Pattern, State},
    error::Error,
};
use log::trace;
use std::{
    fmt::{self, Display, Formatter},
    num::IntErrorKind,
    str::FromStr,
};

/// The transition table of an elementary cellular automaton.
///
/// It maps each of the 8 [`Pattern`]s to the state of the cell
/// in the next generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    /// The rule number.
    rule: u8,
    /// The next state of each pattern, indexed by [`Pattern::index`].
    table: [State; 8],
}

/// Builds the rule table of a rule number.
///
/// Fails with [`Error::RuleOutOfRange`] if the number is not between 0 and 255.
pub fn build_rule_table(rule_number: i64) -> Result<RuleTable, Error> {
    let rule = u8::try_from(rule_number).map_err(|_| Error::RuleOutOfRange(rule_number))?;
    Ok(RuleTable::new(rule))
}

impl RuleTable {
    /// Constructs the rule table of a rule number.
    pub fn new(rule: u8) -> Self {
        // Write the rule number in 8 binary digits and reverse them;
        // the i-th digit is then the result of the i-th pattern.
        let mut table = [State(0); 8];
        for (i, state) in table.iter_mut().enumerate() {
            *state = State(rule >> i & 1);
        }
        trace!("Built the table of rule {}: {:?}", rule, table);
        RuleTable { rule, table }
    }

    /// The rule number.
    #[inline]
    pub fn rule_number(&self) -> u8 {
        self.rule
    }

    /// The next state of a cell whose neighborhood is `pattern`.
    #[inline]
    pub fn get(&self, pattern: Pattern) -> State {
        self.table[pattern.index()]
    }

    /// The next state of the middle cell of a window of 3 cells.
    ///
    /// A window of any other length is a bug in the caller,
    /// and fails with [`Error::InvalidPattern`].
    pub fn lookup(&self, window: &[State]) -> Result<State, Error> {
        let pattern = Pattern::try_from(window)?;
        Ok(self.get(pattern))
    }

    /// All patterns and their results, in the order of [`Pattern::ALL`].
    pub fn entries(&self) -> impl Iterator<Item = (Pattern, State)> + '_ {
        Pattern::ALL
            .into_iter()
            .map(move |pattern| (pattern, self.get(pattern)))
    }

    /// Constructs a rule table from the result of each pattern.
    fn from_fn<F: Fn(Pattern) -> State>(f: F) -> Self {
        let rule = Pattern::ALL
            .into_iter()
            .fold(0, |rule, pattern| rule | f(pattern).digit() << pattern.index());
        RuleTable::new(rule)
    }

    /// The equivalent rule with left and right exchanged.
    pub fn mirrored(&self) -> Self {
        Self::from_fn(|p| self.get(Pattern::new(p.right, p.center, p.left)))
    }

    /// The equivalent rule with dead and living cells exchanged.
    pub fn complemented(&self) -> Self {
        Self::from_fn(|p| !self.get(Pattern::new(!p.left, !p.center, !p.right)))
    }

    /// The equivalent rule with both left and right, dead and living
    /// cells exchanged.
    pub fn mirrored_complemented(&self) -> Self {
        self.mirrored().complemented()
    }

    /// Displays the rule table in two lines, the patterns
    /// from `111` to `000` above their results.
    ///
    /// ```plaintext
    /// 111 110 101 100 011 010 001 000
    ///  0   1   1   0   1   1   1   0
    /// ```
    pub fn table_string(&self) -> String {
        let entries: Vec<_> = self.entries().collect();
        let patterns: Vec<_> = entries.iter().rev().map(|(p, _)| p.to_string()).collect();
        let states: Vec<_> = entries
            .iter()
            .rev()
            .map(|(_, s)| format!(" {} ", s.digit()))
            .collect();
        format!(
            "{}\n{}",
            patterns.join(" "),
            states.join(" ").trim_end()
        )
    }
}

impl From<u8> for RuleTable {
    fn from(rule: u8) -> Self {
        RuleTable::new(rule)
    }
}

impl TryFrom<i64> for RuleTable {
    type Error = Error;

    fn try_from(rule_number: i64) -> Result<Self, Self::Error> {
        build_rule_table(rule_number)
    }
}

/// Parses a rule number.
///
/// Accepts `110`, `W110`, `rule110` and `Rule 110`.
///
/// Integers too large for an `i64` are still out of range rather than
/// unparsable; they are reported as `i64::MAX` or `i64::MIN`.
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let number = lower
            .strip_prefix("rule")
            .or_else(|| lower.strip_prefix('w'))
            .unwrap_or(&lower)
            .trim_start();
        let rule_number = match number.parse::<i64>() {
            Ok(n) => n,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(Error::ParseRuleError(s.to_owned())),
            },
        };
        build_rule_table(rule_number)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.rule)
    }
}
