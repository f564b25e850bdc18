use clap::Parser;

use feedlot::cli::{self, diagnostic, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::configure(&cli);

    if let Err(err) = cli::execute(cli) {
        tracing::error!(error = %err, "command failed");
        diagnostic::report(&err);
        std::process::exit(1);
    }
}
