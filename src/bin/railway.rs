extern crate console;
extern crate log;
extern crate nom;
extern crate pretty_env_logger;
extern crate structopt;
extern crate twofold;

use console::{style, Style};
use log::{debug, info};
use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::pair,
    IResult,
};
use structopt::StructOpt;
use twofold::{Alternative, Optional};

#[derive(StructOpt)]
#[structopt(setting = structopt::clap::AppSettings::AllowNegativeNumbers)]
/// Push integers down a railway of checks
///
/// Every value is parsed, bounded and doubled. The first failing stage
/// decides what is reported for that value; later stages never run.
struct Args {
    /// Tokens to parse as signed integers
    values: Vec<String>,

    #[structopt(short, long, default_value = "0")]
    /// Stand-in for values that failed, used when summing
    default: i64,

    #[structopt(short, long)]
    /// Inclusive upper bound on the absolute value of each input
    limit: Option<u64>,

    #[structopt(long)]
    /// Skip the doubling stage
    no_double: bool,
}

fn signed(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

fn parse(token: &str) -> Alternative<String, i64> {
    match all_consuming(signed)(token) {
        Ok((_, n)) => Alternative::right(n),
        Err(_) => Alternative::left(format!("`{}` is not an integer", token)),
    }
}

fn bounded(limit: Option<u64>) -> impl Fn(i64) -> Alternative<String, i64> {
    move |n| match limit {
        Some(limit) if n.unsigned_abs() > limit => {
            Alternative::left(format!("{} is outside of ±{}", n, limit))
        }
        _ => Alternative::right(n),
    }
}

fn doubled(n: i64) -> Alternative<String, i64> {
    n.checked_mul(2)
        .map(Alternative::right)
        .unwrap_or_else(|| Alternative::left(format!("{} overflows when doubled", n)))
}

fn total(values: impl IntoIterator<Item = i64>) -> Alternative<String, i64> {
    values
        .into_iter()
        .fold(Alternative::right(0), |acc, n| {
            acc.flat_map_right(|sum: i64| {
                sum.checked_add(n)
                    .map(Alternative::right)
                    .unwrap_or_else(|| Alternative::left(format!("sum overflows at {} + {}", sum, n)))
            })
        })
}

fn main() {
    pretty_env_logger::init();

    info!(
        "Starting {} version {}",
        env!("CARGO_BIN_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::from_args();
    let info_style = Style::new().cyan();

    let results: Vec<Alternative<String, i64>> = args
        .values
        .iter()
        .map(|token| {
            debug!("Running token {:?}", token);

            let out = parse(token).flat_map_right(bounded(args.limit));
            if args.no_double {
                out
            } else {
                out.flat_map_right(doubled)
            }
        })
        .collect();

    for (token, res) in args.values.iter().zip(results.iter()) {
        let line = res.as_ref().fold(
            |err| style(format!("✗ {}", err)).red().to_string(),
            |n| style(format!("✓ {} -> {}", token, n)).green().to_string(),
        );
        println!("{}", line);
    }

    let sum = total(
        results
            .iter()
            .cloned()
            .map(|res| res.get_or_else(args.default)),
    );

    let passed = results
        .iter()
        .filter(|res| res.to_sequence().next().is_some())
        .count();

    let first = results
        .iter()
        .cloned()
        .map(Alternative::to_optional)
        .find(Optional::is_present)
        .unwrap_or_default();

    println!(
        "{} {}",
        info_style.apply_to("Sum (failures counted as default):"),
        sum.fold(|err| style(err).red().to_string(), |n| n.to_string())
    );
    println!(
        "{} {}/{}",
        info_style.apply_to("Passed:"),
        passed,
        results.len()
    );
    first.if_present(|n| println!("{} {}", info_style.apply_to("First success:"), n));

    info!("Railway finished with {} of {} passing", passed, results.len());

    if passed != results.len() {
        std::process::exit(1);
    }
}
