use std::process::ExitCode;

use clap::{Parser, Subcommand};
use prize_draw_core::presentation::{prize_badges, shows_promo_note, PROMO_NOTE};
use prize_draw_core::{
    DrawController, DrawPhase, EntryForm, PrizeInventory, PrizeService, Route, ThreadPause,
};
use prize_draw_ui::config::{init_logging, DrawArgs, ServiceArgs};
use tracing::error;

#[derive(Parser)]
#[command(about = "Headless prize draw against the hosted service")]
struct Cli {
    #[command(flatten)]
    service: ServiceArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit the entry form and print the draw route
    Enter {
        #[arg(long)]
        contact: String,
        /// Decline marketing consent
        #[arg(long)]
        no_consent: bool,
    },
    /// Draw for an entry, or show its recorded outcome
    Draw {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Print remaining prizes
    Inventory,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let service = match cli.service.connect() {
        Ok(service) => service,
        Err(err) => {
            error!(error = %err, "failed to start");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Enter {
            contact,
            no_consent,
        } => enter(&service, contact, !no_consent),
        Command::Draw { id, draw } => run_draw(&service, &id, &draw),
        Command::Inventory => match service.list_inventory() {
            Ok(rows) => {
                print_inventory(PrizeInventory::from_rows(&rows));
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(error = %err, "failed to load inventory");
                ExitCode::FAILURE
            }
        },
    }
}

fn enter(service: &dyn PrizeService, contact: String, agreed: bool) -> ExitCode {
    let mut form = EntryForm::new(contact, agreed);
    match form.submit(service) {
        Some(route) => {
            println!("{}", route.to_path());
            ExitCode::SUCCESS
        }
        None => {
            if let Some(err) = form.error() {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run_draw(service: &dyn PrizeService, id: &str, draw: &DrawArgs) -> ExitCode {
    let mut controller = match DrawController::mount(&Route::draw(Some(id))) {
        Ok(controller) => controller.with_shake_delay(draw.shake_delay()),
        Err(_) => {
            eprintln!("entry id must not be blank");
            return ExitCode::FAILURE;
        }
    };

    controller.initialize(service);
    if controller.can_draw() {
        controller.draw(service, &ThreadPause);
    }

    if controller.phase() != DrawPhase::Done {
        eprintln!("draw failed; try again");
        return ExitCode::FAILURE;
    }
    match (controller.descriptor(), controller.result()) {
        (Some(descriptor), Some(rank)) => {
            println!("{} {}", descriptor.emoji, descriptor.title);
            println!("{}", descriptor.subtitle);
            if shows_promo_note(rank) {
                println!("\n{PROMO_NOTE}");
            }
        }
        (None, Some(rank)) => println!("rank {rank}"),
        (_, None) => println!("draw completed without a rank"),
    }
    println!();
    print_inventory(controller.inventory());
    ExitCode::SUCCESS
}

fn print_inventory(inventory: PrizeInventory) {
    for badge in prize_badges(inventory) {
        println!("{} {:<4} {}", badge.emoji, badge.label, badge.count);
    }
}
