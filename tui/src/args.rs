//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Error};
use ecaview_lib::{Config, InitRow, RuleTable, MAX_SCALE};
use log::Level;
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

/// Reads a configuration file.
///
/// The format is chosen by the extension: `json`, `yaml` / `yml` or `toml`.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(format!(
            "{}: unknown format, expected .json, .yaml or .toml",
            path.display()
        )),
    }
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    /// Number of rows to print without the TUI.
    pub(crate) generations: usize,
    pub(crate) show_rule: bool,
    pub(crate) fps: u32,
    pub(crate) verbose: u8,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the arguments from an iterator.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut app = command!()
            .long_about(
                "Watch an elementary cellular automaton evolve\n\
                 \n\
                 Each row is computed from the row above it, using one of the \
                 256 rules in Wolfram's numbering. Cells beyond the left and \
                 right edges are always dead.\n\
                 \n\
                 Without the TUI, rows are printed in Plaintext format:\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`.\n",
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule number, between 0 and 255 [default: 110]")
                    .long_help(
                        "Rule number, between 0 and 255 [default: 110]\n\
                         Also accepts forms like \"W110\" or \"rule110\".\n",
                    )
                    .index(1)
                    .value_parser(|r: &str| {
                        r.parse::<RuleTable>()
                            .map(|_| r.to_owned())
                            .map_err(|e| e.to_string())
                    }),
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Number of cells in a row [default: 80]")
                    .short('x')
                    .long("width")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Number of visible rows [default: 40]")
                    .short('y')
                    .long("height")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("SCALE")
                    .help("Size of a cell on the screen, between 1 and 64 [default: 1]")
                    .long_help(
                        "Size of a cell on the screen, between 1 and 64 [default: 1]\n\
                         A cell takes 2 * SCALE columns and SCALE lines of the terminal.\n",
                    )
                    .short('s')
                    .long("scale")
                    .value_parser(value_parser!(u64).range(1..=MAX_SCALE as u64)),
            )
            .arg(
                Arg::new("INIT")
                    .help("How to fill the first row [default: random]")
                    .short('i')
                    .long("init")
                    .value_parser(["random", "center", "dead", "r", "c", "d"]),
            )
            .arg(
                Arg::new("DENSITY")
                    .help("Probability of a cell in a random first row being alive [default: 0.5]")
                    .short('d')
                    .long("density")
                    .value_parser(value_parser!(f64)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random first row")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a JSON, YAML or TOML file\n\
                         Options given on the command line override the file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of rows to print [default: height]")
                    .short('g')
                    .long("generations")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("SHOWRULE")
                    .help("Prints the rule table and exits")
                    .long("show-rule")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("FPS")
                    .help("Rows per second in the TUI")
                    .short('f')
                    .long("fps")
                    .default_value("10")
                    .value_parser(value_parser!(u32).range(1..=1000)),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Logs more details, repeat for even more")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count),
            );

        #[cfg(feature = "tui")]
        {
            app = app.arg(
                Arg::new("NOTUI")
                    .help("Prints the rows instead of entering the TUI")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            );
        }

        let matches = app.try_get_matches_from_mut(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                read_config(path).map_err(|e| app.error(ErrorKind::InvalidValue, e))?
            }
            None => Config::default(),
        };

        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config.rule_string = rule_string.clone();
        }
        if let Some(&width) = matches.get_one::<u64>("WIDTH") {
            config.width = width as usize;
        }
        if let Some(&height) = matches.get_one::<u64>("HEIGHT") {
            config.height = height as usize;
        }
        if let Some(&scale) = matches.get_one::<u64>("SCALE") {
            config.scale = scale as usize;
        }
        if let Some(init) = matches.get_one::<String>("INIT") {
            config.init = match init.as_str() {
                "center" | "c" => InitRow::Center,
                "dead" | "d" => InitRow::Dead,
                _ => InitRow::Random,
            };
        }
        if let Some(&density) = matches.get_one::<f64>("DENSITY") {
            config.density = density;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }

        // Values from a configuration file are not checked by clap.
        config
            .rule_table()
            .and_then(|_| config.validate())
            .map_err(|e| app.error(ErrorKind::InvalidValue, e))?;

        let generations = matches
            .get_one::<u64>("GENERATIONS")
            .map_or(config.height, |&g| g as usize);
        let show_rule = matches.get_flag("SHOWRULE");
        let fps = *matches.get_one::<u32>("FPS").unwrap_or(&10);
        let verbose = matches.get_count("VERBOSE");
        #[cfg(feature = "tui")]
        let no_tui = matches.get_flag("NOTUI");

        Ok(Args {
            config,
            generations,
            show_rule,
            fps,
            verbose,
            #[cfg(feature = "tui")]
            no_tui,
        })
    }

    /// The log level for the number of `-v` flags.
    pub(crate) fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        }
    }
}
