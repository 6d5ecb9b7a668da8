//! Command-line front end for the descriptor transform.
//!
//! Reads JSON from a file, a positional argument, or line-delimited stdin,
//! summarizes each value, and prints one compact JSON document per line.

use std::{
    fs,
    io::{self, BufRead, IsTerminal},
    path::PathBuf,
};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use describe_json::{DescribePolicy, Describer, IndexSource, SeededSource};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "describe-json", version, about = "Summarize large JSON documents")]
struct Args {
    /// Path to a file to read instead of consuming line-delimited JSON from
    /// stdin.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// The maximum array size allowed in the output. Longer arrays are
    /// displayed as two elements: a string describing the size, and one of
    /// the original elements as an example.
    #[arg(short = 'a', long, default_value_t = 1, allow_negative_numbers = true)]
    max_array_size: i64,

    /// The maximum string length allowed in the output. Longer strings are
    /// displayed shortened, with their length and MD5 digest.
    #[arg(short = 's', long, default_value_t = 10, allow_negative_numbers = true)]
    max_string_size: i64,

    /// Display a random array member as the example instead of the first.
    #[arg(short = 'r', long = "randomize-array-member")]
    randomize: bool,

    /// Rewrite object keys to full jq-style access paths like `.a.b[0].c`.
    #[arg(short = 'p', long = "path-keys")]
    path_keys: bool,

    /// Seed for random example selection, for reproducible output.
    #[arg(long, requires = "randomize")]
    seed: Option<u64>,

    /// A JSON string to describe. You can either provide this, or pipe the
    /// JSON through.
    json_string: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let policy = DescribePolicy::new()
        .with_max_array_size(clamp_size(args.max_array_size))
        .with_max_string_size(clamp_size(args.max_string_size))
        .with_randomize(args.randomize)
        .with_path_keys(args.path_keys);

    match args.seed {
        Some(seed) => run(Describer::with_source(policy, SeededSource::from_seed(seed)), &args),
        None => run(Describer::new(policy), &args),
    }
}

fn run<S: IndexSource>(mut describer: Describer<S>, args: &Args) -> anyhow::Result<()> {
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        print_described(&mut describer, &value)
    } else if let Some(json_string) = &args.json_string {
        let value: Value =
            serde_json::from_str(json_string).context("argument is not valid JSON")?;
        print_described(&mut describer, &value)
    } else if io::stdin().is_terminal() {
        Args::command().print_help()?;
        Ok(())
    } else {
        // One JSON value per stdin line; blank lines are skipped.
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            let value: Value =
                serde_json::from_str(&line).context("stdin line is not valid JSON")?;
            print_described(&mut describer, &value)?;
        }
        Ok(())
    }
}

fn print_described<S: IndexSource>(
    describer: &mut Describer<S>,
    value: &Value,
) -> anyhow::Result<()> {
    let described = describer.describe(value);
    println!("{}", serde_json::to_string(&described)?);
    Ok(())
}

/// Negative sizes mean "always summarize": clamp to zero.
fn clamp_size(size: i64) -> usize {
    usize::try_from(size).unwrap_or(0)
}
