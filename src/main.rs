use clap::Parser;
use water_chemistry_etl::cli::{run, Cli};
use water_chemistry_etl::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
