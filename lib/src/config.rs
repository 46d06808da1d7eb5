//! Configuration of a run.

use crate::{
    cells::Row,
    error::Error,
    generator::{generate, Generator},
    rule::RuleTable,
};
use educe::Educe;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest allowed [`scale`](Config#structfield.scale).
pub const MAX_SCALE: usize = 64;

/// How to fill the initial row.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InitRow {
    /// Each cell is alive with probability
    /// [`density`](Config#structfield.density).
    #[educe(Default)]
    Random,

    /// A single living cell in the middle.
    Center,

    /// All cells are dead.
    Dead,
}

/// Configuration of a run.
///
/// The generator will be created from this configuration.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The rule number, e.g. `110` or `W110`.
    #[educe(Default = "110")]
    pub rule_string: String,

    /// Number of cells in a row.
    #[educe(Default = 80)]
    pub width: usize,

    /// Number of rows visible at the same time.
    #[educe(Default = 40)]
    pub height: usize,

    /// Size of a cell on the screen, at most [`MAX_SCALE`].
    #[educe(Default = 1)]
    pub scale: usize,

    /// How to fill the initial row.
    pub init: InitRow,

    /// Probability of a cell in a random initial row being alive.
    #[educe(Default = 0.5)]
    pub density: f64,

    /// Seed of the random initial row.
    ///
    /// `None` means that the seed comes from the system's entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given rule and size.
    pub fn new<S: ToString>(rule_string: S, width: usize, height: usize) -> Self {
        Config {
            rule_string: rule_string.to_string(),
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the width.
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the height.
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Sets the scale.
    pub fn set_scale(mut self, scale: usize) -> Self {
        self.scale = scale;
        self
    }

    /// Sets how to fill the initial row.
    pub fn set_init(mut self, init: InitRow) -> Self {
        self.init = init;
        self
    }

    /// Sets the density of a random initial row.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the seed of a random initial row.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Parses the rule string.
    pub fn rule_table(&self) -> Result<RuleTable, Error> {
        self.rule_string.parse()
    }

    /// Checks the configuration without building anything.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 || self.scale == 0 {
            return Err(Error::NonPositiveError);
        }
        if self.scale > MAX_SCALE {
            return Err(Error::ScaleError(self.scale, MAX_SCALE));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::DensityError(self.density));
        }
        Ok(())
    }

    /// Creates the initial row.
    pub fn initial_row(&self) -> Result<Row, Error> {
        self.validate()?;
        let row = match self.init {
            InitRow::Random => {
                let mut rng = match self.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_entropy(),
                };
                Row::random(self.width, self.density, &mut rng)?
            }
            InitRow::Center => Row::center(self.width),
            InitRow::Dead => Row::dead(self.width),
        };
        Ok(row)
    }

    /// Creates a new generator from the configuration.
    ///
    /// Returns an error if the rule string is invalid,
    /// or the size or density is out of range.
    pub fn generator(&self) -> Result<Generator, Error> {
        let table = self.rule_table()?;
        let initial_row = self.initial_row()?;
        debug!(
            "Rule {}, width {}, {} visible rows, initial population {}",
            table,
            self.width,
            self.height,
            initial_row.population()
        );
        Ok(generate(table, initial_row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Config::default();
        assert_eq!(config.rule_string, "110");
        assert_eq!((config.width, config.height, config.scale), (80, 40, 1));
        assert_eq!(config.init, InitRow::Random);
        assert_eq!(config.density, 0.5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn non_positive() {
        for config in [
            Config::new(110, 0, 10),
            Config::new(110, 10, 0),
            Config::default().set_scale(0),
        ] {
            assert_eq!(config.generator().err(), Some(Error::NonPositiveError));
        }
    }

    #[test]
    fn scale() {
        assert!(Config::default().set_scale(MAX_SCALE).validate().is_ok());
        assert_eq!(
            Config::default().set_scale(MAX_SCALE + 1).validate(),
            Err(Error::ScaleError(MAX_SCALE + 1, MAX_SCALE))
        );
        assert_eq!(
            Config::default().set_scale(usize::MAX).generator().err(),
            Some(Error::ScaleError(usize::MAX, MAX_SCALE))
        );
    }

    #[test]
    fn density() {
        let config = Config::default().set_density(1.5);
        assert_eq!(config.generator().err(), Some(Error::DensityError(1.5)));
        let row = Config::default().set_density(1.0).initial_row().unwrap();
        assert_eq!(row.population(), 80);
        let row = Config::default().set_density(0.0).initial_row().unwrap();
        assert_eq!(row.population(), 0);
    }

    #[test]
    fn invalid_rule() {
        let config = Config::default().set_rule_string(256);
        assert_eq!(config.generator().err(), Some(Error::RuleOutOfRange(256)));
        let config = Config::default().set_rule_string("life");
        assert_eq!(
            config.generator().err(),
            Some(Error::ParseRuleError(String::from("life")))
        );
    }

    #[test]
    fn seeded() {
        let config = Config::new(30, 100, 10).set_seed(Some(42));
        assert_eq!(config.initial_row(), config.initial_row());
        let other = config.clone().set_seed(Some(43));
        assert_ne!(config.initial_row(), other.initial_row());
    }
}
