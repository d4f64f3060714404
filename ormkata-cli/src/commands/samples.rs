use anyhow::Result;
use clap::Args;
use ormkata_core::{DatabaseConfig, SampleRepo};

use super::{connect, print_json};

#[derive(Args, Debug)]
pub struct SamplesArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(config: &DatabaseConfig, args: SamplesArgs) -> Result<()> {
    let pool = connect(config).await?;
    let samples = SampleRepo::new(&pool).scan_rows().await?;

    if args.json {
        return print_json(&samples);
    }

    if samples.is_empty() {
        println!("No samples (try `ormkata seed`)");
    }
    for sample in &samples {
        println!("{:>4}  {}", sample.id, sample.name);
    }
    Ok(())
}
