mod backend;
mod cli;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so command output stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("folio=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_flag(cli.json);
    let data_dir = cli.data_dir.as_path();

    match &cli.command {
        Commands::List => commands::list::run(data_dir, format).await,
        Commands::Show(args) => commands::show::run(data_dir, args, format).await,
        Commands::Add(args) => commands::edit::add(data_dir, args, format).await,
        Commands::Remove(args) => commands::edit::remove(data_dir, args, format).await,
        Commands::Render(args) => commands::render::run(data_dir, args).await,
    }
}
