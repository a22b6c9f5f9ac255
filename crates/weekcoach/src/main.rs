//! Interactive weekly planning coach.
//!
//! Walks through the week's schedule and goals on the terminal, then asks a
//! hosted LLM for personalized coaching tips.
//!
//! Reads the API key from the `ANTHROPIC_API_KEY` environment variable.
//! Without it the schedule and goal summaries still print; only tip
//! generation is skipped. The process exits with status 0 on every path,
//! including errors and Ctrl-C.
//!
//! # Examples
//!
//! ```sh
//! export ANTHROPIC_API_KEY='your-api-key-here'
//! weekcoach
//!
//! # With debug logging on stderr
//! weekcoach -vv
//! ```

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use weekcoach::advice::generate_tips;
use weekcoach::input::{LineSource, StdinSource, collect_goals, collect_schedule, confirm};
use weekcoach::prompt::build_prompt;
use weekcoach::render;
use weekcoach::{API_KEY_ENV, CoachConfig};

/// Interactive weekly planning coach powered by a hosted LLM.
#[derive(Parser)]
#[command(name = "weekcoach", version, about)]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Ctrl-C gets a farewell instead of a stack trace.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nGoodbye!");
        std::process::exit(0);
    }) {
        tracing::warn!("failed to install interrupt handler: {e}");
    }

    let config = CoachConfig::from_env();
    let mut source = StdinSource;

    // Failures end the run with a message, never a non-zero exit.
    if let Err(e) = run(&config, &mut source).await {
        eprintln!("\nUnexpected error: {e}");
    }
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(config: &CoachConfig, source: &mut dyn LineSource) -> io::Result<()> {
    println!("{}", render::banner("AI LIFE PLANNER"));
    println!("Plan your week and get personalized AI coaching!");

    println!("{}", render::banner("WEEKLY SCHEDULE"));
    println!("For each day, enter your activities with time blocks.");
    println!("Format: 'HH:MM-HH:MM Activity name' (e.g., '09:00-10:30 Team meeting')");
    println!("Press Enter on an empty line when done with that day.");
    println!("Activities can overlap - this helps identify time conflicts!");
    let schedule = collect_schedule(source)?;

    println!("{}", render::banner("YOUR GOALS"));
    println!("Enter your goals. Type 'done' when finished.\n");
    let goals = collect_goals(source)?;

    println!("{}", render::banner("YOUR SCHEDULE SUMMARY"));
    print!("{}", render::format_schedule_summary(&schedule));
    println!("{}", render::banner("YOUR GOALS SUMMARY"));
    print!("{}", render::format_goals_summary(&goals));

    println!("\n{}", render::RULE);
    if confirm(source, "\nGenerate AI tips? (yes/no): ")? {
        if config.api_key.is_none() {
            eprintln!("\nERROR: {API_KEY_ENV} environment variable not set!");
            eprintln!("Set it with: export {API_KEY_ENV}='your-api-key-here'");
        } else {
            println!("\nAnalyzing your schedule and goals...");
            println!("This may take a moment...");

            let prompt = build_prompt(&schedule, &goals);
            match generate_tips(config, &prompt).await {
                Ok(tips) if !tips.is_empty() => {
                    println!("{}", render::banner("YOUR PERSONALIZED TIPS"));
                    print!("{}", render::format_tips(&tips));
                    println!("\n{}", render::RULE);
                }
                Ok(_) => println!("\nNo tips came back this time."),
                Err(e) => eprintln!("\nERROR: {e}"),
            }
        }
    } else {
        println!("\nNo problem! Run the program again when you're ready.");
    }

    println!("\n✨ Thank you for using AI Life Planner!\n");
    Ok(())
}
