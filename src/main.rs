//! Scanverify CLI entry point.

use clap::Parser;

use scanverify::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    match scanverify::cli::execute(&cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => scanverify::cli::handle_error(err, cli.json),
    }
}
