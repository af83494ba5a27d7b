use clap::Parser;

mod cli;
mod core;
mod lang;
mod snippets;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    core::run(args.command).await
}
