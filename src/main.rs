use clap::Parser;
use colored::Colorize;
use once_cell::sync::Lazy;
use primbench::cli::Cli;

static CMD_ARGS: Lazy<Cli> = Lazy::new(Cli::parse);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = CMD_ARGS.run(&mut std::io::stdout().lock()) {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), format!("{err:#}").red());
        std::process::exit(1);
    }
    Ok(())
}
