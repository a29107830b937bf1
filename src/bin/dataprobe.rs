use clap::{Arg, ArgMatches, Command};
use std::io;
use std::process;
use std::time::Instant;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dataprobe::convert::{self, HexPadding};
use dataprobe::input::{self, Word};
use dataprobe::stats;
use dataprobe::util::{self, Elapsed};
use dataprobe::wordcount;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "DATAPROBE_LOG";

#[derive(Debug, Error)]
enum Error {
    #[error("{0}")]
    ConvertError(#[from] convert::Error),
    /// IO error.
    #[error("{0}")]
    IOError(#[from] io::Error),
    #[error("{0}")]
    StatsError(#[from] stats::Error),
    #[error("Failed to initialize logging: {0}")]
    LogError(String),
}

fn output_arg(default: &'static str) -> Arg<'static> {
    Arg::new("output")
        .short('o')
        .long("output")
        .takes_value(true)
        .default_value(default)
        .help("Results file")
}

fn main() {
    let matches = Command::new("dataprobe")
        .author("saneki <s@neki.me>")
        .version("0.1.0")
        .about("Converts, summarizes and counts line-oriented data files")
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .global(true)
            .takes_value(false)
            .help("Show debug output"))
        .arg(Arg::new("quiet")
            .short('q')
            .long("quiet")
            .global(true)
            .takes_value(false)
            .conflicts_with("verbose")
            .help("Only show errors"))
        .subcommand(
            Command::new("convert")
                .about("Convert integers to two's-complement binary and hexadecimal")
                .arg(Arg::new("legacy-hex")
                    .long("legacy-hex")
                    .takes_value(false)
                    .help("Pad negative hexadecimal values to 10 digits"))
                .arg(output_arg(util::CONVERSION_RESULTS))
                .arg(Arg::new("file")
                    .required(true)
                    .help("File with one integer per line"))
        )
        .subcommand(
            Command::new("stats")
                .about("Compute descriptive statistics")
                .arg(output_arg(util::STATISTICS_RESULTS))
                .arg(Arg::new("file")
                    .required(true)
                    .help("File with one number per line"))
        )
        .subcommand(
            Command::new("wordcount")
                .visible_alias("wc")
                .about("Count occurrences of each word")
                .arg(output_arg(util::WORD_COUNT_RESULTS))
                .arg(Arg::new("file")
                    .required(true)
                    .help("File with one word per line"))
        )
        .get_matches();

    let result = init_tracing(matches.is_present("quiet"), matches.is_present("verbose"))
        .and_then(|()| main_with_args(&matches));

    if let Err(err) = result {
        println!("Error: {}", err);
        process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), Error> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| Error::LogError(err.to_string()))
}

fn main_with_args(matches: &ArgMatches) -> Result<(), Error> {
    let start = Instant::now();

    match matches.subcommand() {
        Some(("convert", matches)) => {
            let path = matches.value_of("file").unwrap();
            let output = matches.value_of("output").unwrap();
            let padding = if matches.is_present("legacy-hex") {
                HexPadding::Legacy
            } else {
                HexPadding::Width
            };

            let tokens = input::read_tokens_path::<i64>(path)?;
            let conversion = convert::convert_batch(&tokens.values, padding)?;
            info!(width = conversion.width.bits(), records = conversion.records.len(), "converted");

            print!("{}", conversion);
            println!("{}\n", Elapsed::since(start));
            util::write_results(output, &conversion)?;
            Ok(())
        }
        Some(("stats", matches)) => {
            let path = matches.value_of("file").unwrap();
            let output = matches.value_of("output").unwrap();

            let tokens = input::read_tokens_path::<f64>(path)?;
            let statistics = stats::compute(&tokens.values)?;
            let elapsed = Elapsed::since(start);

            print!("{}", statistics);
            println!("{}\n", elapsed);
            util::write_results(output, format_args!("{}{}\n", statistics, elapsed))?;
            Ok(())
        }
        Some(("wordcount", matches)) => {
            let path = matches.value_of("file").unwrap();
            let output = matches.value_of("output").unwrap();

            let tokens = input::read_tokens_path::<Word>(path)?;
            let counts = wordcount::count(&tokens.values);
            info!(distinct = counts.entries().len(), total = counts.total(), "counted");

            print!("{}", counts);
            println!("{}\n", Elapsed::since(start));
            util::write_results(output, &counts)?;
            Ok(())
        }
        None => {
            println!("No subcommand was used");
            Ok(())
        }
        _ => unreachable!(),
    }
}
