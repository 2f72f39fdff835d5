use anyhow::Result;
use clap::Parser;

/// Tickbox desktop launcher.
#[derive(Debug, Parser)]
#[command(name = "tickbox", version, about = "A small per-account to-do list")]
struct Cli {
    /// Display name for the local development identity.
    #[arg(long)]
    display_name: Option<String>,

    /// Skip seeding the demo tasks on startup.
    #[arg(long)]
    no_seed: bool,

    /// Start in the light theme instead of following the system.
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = tickbox::DesktopOptions {
        display_name: cli.display_name,
        seed_demo_data: !cli.no_seed,
        light_theme: cli.light,
    };
    tickbox::desktop::run(options)?;

    Ok(())
}
