//! Offline fairness check for a die.
//!
//! Rolls a die many times and runs a chi-square goodness-of-fit test.
//! Exit code 0 when the die fits uniform, 1 when it does not, 2 on bad input.

use dice_engine::core::{DiceRng, FairnessConfig, RngHandle};
use dice_engine::dice::Die;
use dice_engine::fairness::validate_die;

struct Args {
    faces: u32,
    rolls: usize,
    significance: f64,
    seed: Option<u64>,
    json: bool,
}

fn usage() -> ! {
    eprintln!("Usage: dice-fairness [--faces N] [--rolls N] [--significance F] [--seed N] [--json]");
    eprintln!("  --faces N          Faces on the die (default: 6)");
    eprintln!("  --rolls N          Number of rolls to sample (default: 600000)");
    eprintln!("  --significance F   Significance level (default: 0.05)");
    eprintln!("  --seed N           Seed for a reproducible sample (default: random)");
    eprintln!("  --json             Print the report as JSON");
    std::process::exit(2);
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.map(|v| v.parse::<T>()) {
        Some(Ok(parsed)) => parsed,
        Some(Err(_)) => {
            eprintln!("Invalid {} value: {}", flag, value.map(String::as_str).unwrap_or(""));
            std::process::exit(2);
        }
        None => {
            eprintln!("Missing value for {}", flag);
            std::process::exit(2);
        }
    }
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        faces: 6,
        rolls: 600_000,
        significance: FairnessConfig::default().significance,
        seed: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--faces" => {
                i += 1;
                parsed.faces = parse_value("--faces", args.get(i));
            }
            "--rolls" => {
                i += 1;
                parsed.rolls = parse_value("--rolls", args.get(i));
            }
            "--significance" => {
                i += 1;
                parsed.significance = parse_value("--significance", args.get(i));
            }
            "--seed" => {
                i += 1;
                parsed.seed = Some(parse_value("--seed", args.get(i)));
            }
            "--json" => parsed.json = true,
            "--help" | "-h" => usage(),
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
            }
        }
        i += 1;
    }
    parsed
}

fn main() {
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = parse_args();
    let rng = match args.seed {
        Some(seed) => DiceRng::new(seed),
        None => DiceRng::from_entropy(),
    };
    let seed = rng.seed();

    let mut die = match Die::with_rng(args.faces, RngHandle::new(rng)) {
        Ok(die) => die,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let config = FairnessConfig::default().with_significance(args.significance);
    let report = match validate_die(&mut die, args.rolls, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        println!("{}", report);
        println!("  seed {}", seed);
    }

    std::process::exit(if report.fits_uniform { 0 } else { 1 });
}
