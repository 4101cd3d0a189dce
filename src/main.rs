//! hscale — abbreviate large round numbers from the command line.
//!
//! Thin binary entry point. All formatting logic lives in `hscale-core`;
//! numbers that are not abbreviated are printed with thousands grouping.

mod cli;

use hscale_core::grouping::group_thousands;
use serde::Serialize;

/// One line of `--json` output.
#[derive(Serialize)]
struct Row<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse_args();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let formatter = args.formatter()?;
    tracing::debug!(
        min = formatter.min(),
        scales = formatter.scales().len(),
        "formatter ready"
    );

    let mut failures = 0usize;
    for number in &args.numbers {
        match formatter.format(number, group_thousands) {
            Ok(output) if args.json => {
                let row = Row {
                    input: number,
                    output: &output,
                };
                println!("{}", serde_json::to_string(&row)?);
            }
            Ok(output) => println!("{number} => {output}"),
            Err(e) => {
                tracing::error!("{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} numbers could not be formatted",
            args.numbers.len()
        );
    }
    Ok(())
}
