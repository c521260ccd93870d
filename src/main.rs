use anyhow::Result;
use clap::Parser;

use payday::cli::{handle_allowance_command, AllowanceArgs};
use payday::config::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "payday",
    version,
    about = "How much money can I spend per day until payday?",
    long_about = "Splits the money you have left, minus the fixed expenses still \
                  to pay, evenly across the days remaining until your next payday."
)]
struct Cli {
    #[command(flatten)]
    allowance: AllowanceArgs,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    handle_allowance_command(&cli.allowance, &mut stdout.lock())?;

    Ok(())
}
