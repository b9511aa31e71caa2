use clap::Parser;
use schedule_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Schedule Processor - Event Schedule CSV Converter");
    println!("=================================================");
    println!();
    println!("Convert published spreadsheet exports of multi-day event schedules");
    println!("from CSV format into day-grouped activity listings.");
    println!();
    println!("USAGE:");
    println!("    schedule-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Fetch a published CSV source and render the schedule");
    println!("    convert     Convert a local CSV file into a rendered schedule");
    println!("    inspect     Inspect a CSV file and report how it parses");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch a published sheet and show day cards in the terminal:");
    println!("    schedule-processor fetch --url 'https://docs.google.com/.../pub?output=csv'");
    println!();
    println!("    # Convert a local export to JSON:");
    println!("    schedule-processor convert schedule.csv --output-format json -o schedule.json");
    println!();
    println!("    # See why rows are missing from the rendered schedule:");
    println!("    schedule-processor inspect schedule.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    schedule-processor <COMMAND> --help");
}
