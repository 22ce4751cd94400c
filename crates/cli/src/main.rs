//! AXI4-Lite to AHB-Lite bridge simulator CLI.
//!
//! This binary provides a single entry point for running the bridge model. It performs:
//! 1. **Single run:** Build one system from a JSON config and/or flags and run the scenarios.
//! 2. **Matrix run:** Sweep size selection, idle insertion, and backpressure like a test factory.
//!
//! Log verbosity follows `RUST_LOG`; `--trace` turns on per-cycle signal tracing.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use axil2ahb_core::Config;
use axil2ahb_core::common::{CYCLE_PAUSE, SimError};
use axil2ahb_core::sim::Simulator;
use axil2ahb_core::sim::scenario;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "AXI4-Lite to AHB-Lite bridge simulator",
    long_about = "Drive the bridge model with read/write scenarios and report statistics.\n\nExamples:\n  sim run\n  sim run --size-sel-addr-bits 2 --idle --backpressure\n  sim run --config bridge.json --trace\n  sim matrix"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scenario set against one configuration.
    Run {
        /// JSON configuration file; flags below override it.
        #[arg(short, long)]
        config: Option<String>,

        /// Width of the size-select address field.
        #[arg(long)]
        size_sel_addr_bits: Option<u32>,

        /// Insert idle cycles on AW, W, and AR.
        #[arg(long)]
        idle: bool,

        /// Apply backpressure on B and R.
        #[arg(long)]
        backpressure: bool,

        /// Insert wait states in the SRAM data phase.
        #[arg(long)]
        slave_waits: bool,

        /// Log every cycle's handshake signals.
        #[arg(long)]
        trace: bool,

        /// Statistics sections to print (summary, traffic, stalls); default all.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,
    },

    /// Run every combination of size selection {0, 2}, idle, and backpressure.
    Matrix {
        /// Insert wait states in the SRAM data phase.
        #[arg(long)]
        slave_waits: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            size_sel_addr_bits,
            idle,
            backpressure,
            slave_waits,
            trace,
            stats,
        } => {
            let mut cfg = load_config(config.as_deref());
            if let Some(bits) = size_sel_addr_bits {
                cfg.bridge.size_sel_addr_bits = bits;
            }
            apply_flags(&mut cfg, idle, backpressure, slave_waits);
            cfg.general.trace |= trace;
            init_logging(cfg.general.trace);
            cmd_run(&cfg, &stats);
        }
        Commands::Matrix { slave_waits } => {
            init_logging(false);
            cmd_matrix(slave_waits);
        }
    }
}

fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Loads a JSON config from `path`, or the defaults; exits with code 1 on failure.
fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: cannot read {path}: {e}");
            process::exit(1);
        }
    };
    match Config::from_json(&text) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {path}: {e}");
            process::exit(1);
        }
    }
}

fn apply_flags(cfg: &mut Config, idle: bool, backpressure: bool, slave_waits: bool) {
    if idle {
        cfg.stimulus.idle_pattern = Some(CYCLE_PAUSE.to_vec());
    }
    if backpressure {
        cfg.stimulus.backpressure_pattern = Some(CYCLE_PAUSE.to_vec());
    }
    if slave_waits {
        cfg.memory.wait_pattern = Some(CYCLE_PAUSE.to_vec());
    }
}

/// Builds a simulator, resets it, and runs the scenario set.
fn run_scenarios(cfg: &Config) -> Result<Simulator, SimError> {
    let mut sim = Simulator::new(cfg)?;
    sim.reset();
    scenario::run_all(&mut sim)?;
    Ok(sim)
}

fn cmd_run(cfg: &Config, sections: &[String]) {
    println!("Configuration:");
    println!(
        "  size_sel_addr_bits: {}  ahb_addr_width: {}  SRAM: {} KiB",
        cfg.bridge.size_sel_addr_bits,
        cfg.bridge.ahb_addr_width,
        cfg.memory.size_bytes / 1024
    );
    println!(
        "  idle: {}  backpressure: {}  slave waits: {}",
        cfg.stimulus.idle_pattern.is_some(),
        cfg.stimulus.backpressure_pattern.is_some(),
        cfg.memory.wait_pattern.is_some()
    );
    println!();

    match run_scenarios(cfg) {
        Ok(sim) => {
            println!("[*] PASS after {} cycles", sim.cycle());
            sim.stats().print_sections(sections);
        }
        Err(e) => {
            eprintln!("\n[!] FAIL: {e}");
            process::exit(1);
        }
    }
}

fn cmd_matrix(slave_waits: bool) {
    let mut failures = 0usize;
    let mut total = 0usize;

    for bits in [0, 2] {
        for idle in [false, true] {
            for backpressure in [false, true] {
                total += 1;
                let mut cfg = Config::default();
                cfg.bridge.size_sel_addr_bits = bits;
                apply_flags(&mut cfg, idle, backpressure, slave_waits);
                let label = format!(
                    "size_sel_addr_bits={bits} idle={idle} backpressure={backpressure}"
                );
                match run_scenarios(&cfg) {
                    Ok(sim) => info!(cycles = sim.cycle(), "PASS {label}"),
                    Err(e) => {
                        failures += 1;
                        error!(error = %e, "FAIL {label}");
                    }
                }
            }
        }
    }

    println!("\n[*] {} of {} configurations passed", total - failures, total);
    if failures > 0 {
        process::exit(1);
    }
}
