//! Page replacement simulator CLI.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use pagesim::{AccessOutcome, AccessSimulator, MAX_PAGES, PolicyKind, SimConfig, SimStats, Trace};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Single-level page table simulator with LRU/LFU replacement",
    long_about = None,
)]
struct Cli {
    /// Number of frames to simulate in the page table.
    frames: usize,

    /// File containing the memory trace, one page number per line.
    trace: PathBuf,

    /// The page replacement policy, either LRU or LFU.
    policy: PolicyKind,

    /// Print every access and every fault.
    #[arg(short, long)]
    verbose: bool,

    /// Also print the run statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Size of the page address space.
    #[arg(long, default_value_t = MAX_PAGES)]
    max_pages: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("\n\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> pagesim::Result<()> {
    let config = SimConfig::new(cli.frames, cli.policy).with_max_pages(cli.max_pages);
    let mut sim = AccessSimulator::new(&config)?;
    let trace = Trace::from_file(&cli.trace)?;

    if cli.verbose {
        println!("\n..:: Output mode - Verbose ::..");
    }

    let frames = config.frames;
    let policy = sim.policy_name();
    let stats = sim.run_with(&trace, |entry, outcome| {
        if cli.verbose {
            print_access(entry.page, outcome, frames, policy);
        }
    })?;

    if cli.verbose {
        stats.print();
    }
    if cli.json {
        print_json(&config, &stats);
    }

    println!(
        "\n{} page faults encountered during simulation",
        stats.faults
    );
    Ok(())
}

fn print_access(page: i64, outcome: &AccessOutcome, frames: usize, policy: &str) {
    println!("page {}: access", page);
    match *outcome {
        AccessOutcome::Hit { .. } => {}
        AccessOutcome::Loaded { frame } => println!(
            "     PAGE FAULT accessing {}, loaded into free frame {} of {}",
            page,
            frame + 1,
            frames
        ),
        AccessOutcome::Replaced {
            frame,
            evicted,
            key,
        } => println!(
            "     PAGE FAULT accessing {}, replaced frame {} of {} (evicted page {}, {} key {})",
            page,
            frame + 1,
            frames,
            evicted,
            policy,
            key
        ),
    }
}

fn print_json(config: &SimConfig, stats: &SimStats) {
    let report = serde_json::json!({
        "config": config,
        "stats": stats,
        "hit_ratio": stats.hit_ratio(),
    });
    match serde_json::to_string_pretty(&report) {
        Ok(s) => println!("{}", s),
        Err(e) => log::warn!("could not serialize statistics: {}", e),
    }
}
