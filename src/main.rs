use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = spacelink::cli::Cli::parse();
    if let Err(e) = spacelink::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
