use anyhow::Result;
use clap::Parser;

mod commands;

use commands::filter;

#[derive(Parser, Debug)]
#[command(
    name = "pkafilter",
    about = "Filter pKa data from a PROPKA output file and write psfgen protonation directives.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(flatten)]
    filter: filter::FilterArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    filter::run(&cli.filter)
}
