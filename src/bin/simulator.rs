//! Shadow Gate Headless Balance Simulator
//!
//! Plays scripted sessions through the same reducer as the game and prints
//! a balance summary.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of sessions (default: 100)
//!   --seed N        Base RNG seed; run i uses seed + i (default: random)
//!   --actions N     Action limit per session (default: 20000)
//!   --target N      Level that counts as completed (default: 50)
//!   --verbose       One line per run
//!   --json          Print the report as JSON
//!   --quiet         No banner

use shadow_gate::simulator::{run_simulation, SimConfig};

struct CliArgs {
    sim: SimConfig,
    json: bool,
    quiet: bool,
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|raw| raw.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a number");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        sim: SimConfig::default(),
        json: false,
        quiet: false,
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                cli.sim.num_runs = parse_number(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                cli.sim.seed = Some(parse_number(&args, i, "--seed"));
            }
            "--actions" => {
                i += 1;
                cli.sim.max_actions_per_run = parse_number(&args, i, "--actions");
            }
            "--target" => {
                i += 1;
                cli.sim.target_level = parse_number(&args, i, "--target");
            }
            "--verbose" => cli.sim.verbosity = 2,
            "--json" => cli.json = true,
            "--quiet" => cli.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

fn print_usage() {
    eprintln!(
        "Shadow Gate Balance Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of sessions (default: 100)\n\
         \x20 --seed N        Base RNG seed (default: random)\n\
         \x20 --actions N     Action limit per session (default: 20000)\n\
         \x20 --target N      Level that counts as completed (default: 50)\n\
         \x20 --verbose       One line per run\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --quiet         No banner\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args();
    if !cli.quiet && !cli.json {
        eprintln!(
            "Shadow Gate Simulator: {} run(s) x {} actions, target Lv.{}, seed={}",
            cli.sim.num_runs,
            cli.sim.max_actions_per_run,
            cli.sim.target_level,
            cli.sim
                .seed
                .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
        );
    }

    let report = run_simulation(&cli.sim);
    if cli.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }
}
