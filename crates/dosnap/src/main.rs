use clap::Parser;

use dosnap::config::CliArgs;

#[tokio::main]
async fn main() {
    dosnap::logging::init();

    let cli = CliArgs::parse();
    if let Err(err) = dosnap::run(cli).await {
        eprintln!("dosnap failed: {}", err);
        std::process::exit(1);
    }
}
