use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the prize draw workspace",
    long_about = "A unified CLI for launching the prize draw front ends\n\
                  and running CI checks in the prize draw workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the desktop draw UI (flags after `--` are forwarded)
    Ui {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the headless CLI (flags after `--` are forwarded)
    Cli {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the test suites of every crate
    Test,
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Core tests without the HTTP client
    Offline,
    /// Run check + offline
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_bin(bin: &str, forwarded: &[String]) {
    let mut args = vec!["run", "-p", "prize_draw_ui", "--bin", bin];
    if !forwarded.is_empty() {
        args.push("--");
        args.extend(forwarded.iter().map(String::as_str));
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn run_tests() {
    step("Test prize_draw_core");
    run_cargo(&["test", "-p", "prize_draw_core", "--all-features"]);

    step("Test prize_draw_ui");
    run_cargo(&["test", "-p", "prize_draw_ui"]);
}

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    run_tests();
}

fn ci_offline() {
    step("Test prize_draw_core without remote");
    run_cargo(&["test", "-p", "prize_draw_core", "--no-default-features"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ui { args } => run_bin("prize_draw_ui", &args),
        Commands::Cli { args } => run_bin("prize_draw_cli", &args),
        Commands::Test => run_tests(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Offline => ci_offline(),
                CiJob::All => {
                    ci_check();
                    ci_offline();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
