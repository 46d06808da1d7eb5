use crate::args::Args;
use log::info;
use std::{
    error::Error,
    io::{self, BufWriter, Write},
};

#[cfg(feature = "tui")]
use crate::{tui::run_with_tui, window::RowWindow};

/// Prints the rule table, and its equivalent rules.
fn show_rule(args: &Args) -> Result<(), Box<dyn Error>> {
    let table = args.config.rule_table()?;
    println!(
        "{} (mirrored: {}, complemented: {}, both: {})",
        table,
        table.mirrored(),
        table.complemented(),
        table.mirrored_complemented()
    );
    println!("{}", table.table_string());
    Ok(())
}

/// Prints the rows in Plaintext format, one row per line.
fn print_rows(args: &Args) -> Result<(), Box<dyn Error>> {
    let gen = args.config.generator()?;
    info!("Printing {} rows of {}", args.generations, gen.rule());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for row in gen.take(args.generations) {
        writeln!(out, "{}", row)?;
    }
    out.flush()?;
    Ok(())
}

pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.show_rule {
        return show_rule(&args);
    }

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            let window = RowWindow::new(args.config.generator()?, args.config.height);
            run_with_tui(window, args.config.scale, args.fps)?;
            return Ok(());
        }
    }

    print_rows(&args)
}
