use anyhow::Result;
use clap::Parser;

use shopping_knn::config::Cli;
use shopping_knn::pipeline;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let report = pipeline::run(&cli.data, &cli.pipeline_config())?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}
