// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `width` binary: print the Gabai width bound (28 or 32) of a Gauss code.
//!
//! ```bash
//! width -- -1, 2, -3, 1, -2, 3
//! width "[1, -2, 3, -1, 2, -4, 5, -3, 4, -5]" --strands
//! cargo run --release --features rayon -- --parallel 1 -2 3 -4 2 -3 5 -1 4 -5
//! ```

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gabai_width::{Diagram, GaussCode, WidthSearch};

#[derive(Parser, Debug)]
#[command(
    name = "width",
    version,
    about = "Upper bound on Gabai width for a knot diagram of Wirtinger number four",
    long_about = None,
)]
struct Cli {
    /// Search seed triples on all cores (needs the `rayon` feature).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Log each seed trial.
    #[arg(long, short = 'v', default_value_t = false)]
    verbose: bool,

    /// Print the strands and their crossings before the bound.
    #[arg(long, default_value_t = false)]
    strands: bool,

    /// Gauss code entries, e.g. `-1, 2, -3, 1, -2, 3`, or the whole code as one argument.
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let code = match cli.tokens.as_slice() {
        [single] => single.parse::<GaussCode>(),
        tokens => GaussCode::from_tokens(tokens),
    }
    .context("reading Gauss code")?;

    let diagram = Diagram::build(code).context("building diagram")?;
    if cli.strands {
        print_strands(&diagram);
    }

    let search = WidthSearch::new(diagram)?;
    let report = if cli.parallel {
        search.run_parallel()
    } else {
        search.run()
    };

    println!("{}", report.bound);
    Ok(())
}

fn print_strands(diagram: &Diagram) {
    println!("code: {}", diagram.code());
    for strand in diagram.strands() {
        let crossings: Vec<String> = strand
            .crossings
            .iter()
            .map(|c| format!("{} ({} {})", c.number, c.under_start, c.under_end))
            .collect();
        println!(
            "{}: {:?} over [{}]",
            strand.id,
            strand.entries,
            crossings.join(", ")
        );
    }
}
