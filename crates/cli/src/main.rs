mod cmd;
mod logging;
mod prompt;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "envsetup",
    version,
    about = "Prompts for environment variables and generates .env files from an annotated .env.example"
)]
pub struct Cli {
    /// Location of the input .env.example file
    #[arg(short, long, default_value = ".env.example")]
    pub input: PathBuf,

    /// Location of the .env file that should be written ("-" for stdout)
    #[arg(short, long, default_value = ".env")]
    pub output: PathBuf,

    /// Pre-supplied answer, as KEY=VALUE (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Never prompt; use --var values and declared defaults only
    #[arg(long)]
    pub batch: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    cmd::configure::run(&cli);
    Ok(())
}
