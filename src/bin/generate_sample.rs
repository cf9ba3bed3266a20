use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shopping_knn::data::model::{FEATURE_NAMES, MONTH_TOKENS};

/// Write a synthetic shopping-sessions CSV in the layout `shopping-knn` reads.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Number of sessions to generate.
    #[arg(long, default_value_t = 1000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "shopping.csv")]
    output: PathBuf,
}

/// One generated session, already rendered to CSV fields.
fn generate_session(rng: &mut ChaCha8Rng) -> Vec<String> {
    // Buyers browse longer and land on pages with value attached.
    let buyer = rng.gen_bool(0.15);
    let depth = if buyer { 2.0 } else { 1.0 };

    let administrative = rng.gen_range(0..(6.0 * depth) as u32);
    let informational = rng.gen_range(0..3u32);
    let product_related = rng.gen_range(1..(40.0 * depth) as u32);
    let per_page = |rng: &mut ChaCha8Rng| rng.gen_range(5.0..60.0);

    let admin_duration = administrative as f64 * per_page(rng);
    let info_duration = informational as f64 * per_page(rng);
    let product_duration = product_related as f64 * per_page(rng);

    let bounce_rates: f64 = if buyer {
        rng.gen_range(0.0..0.02)
    } else {
        rng.gen_range(0.0..0.2)
    };
    let exit_rates: f64 = (bounce_rates + rng.gen_range(0.0..0.05_f64)).min(0.2);
    let page_values: f64 = if buyer {
        rng.gen_range(5.0..80.0)
    } else if rng.gen_bool(0.1) {
        rng.gen_range(0.0..20.0)
    } else {
        0.0
    };
    let special_day = [0.0, 0.0, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0][rng.gen_range(0..8usize)];

    let month = MONTH_TOKENS[rng.gen_range(0..MONTH_TOKENS.len())];
    let visitor = match rng.gen_range(0..20) {
        0 => "Other",
        1..=3 => "New_Visitor",
        _ => "Returning_Visitor",
    };
    let weekend = if rng.gen_bool(0.23) { "TRUE" } else { "FALSE" };
    let revenue = if buyer { "TRUE" } else { "FALSE" };

    vec![
        administrative.to_string(),
        format!("{admin_duration:.2}"),
        informational.to_string(),
        format!("{info_duration:.2}"),
        product_related.to_string(),
        format!("{product_duration:.2}"),
        format!("{bounce_rates:.4}"),
        format!("{exit_rates:.4}"),
        format!("{page_values:.4}"),
        special_day.to_string(),
        month.to_string(),
        rng.gen_range(1..=8u32).to_string(),
        rng.gen_range(1..=13u32).to_string(),
        rng.gen_range(1..=9u32).to_string(),
        rng.gen_range(1..=20u32).to_string(),
        visitor.to_string(),
        weekend.to_string(),
        revenue.to_string(),
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut header: Vec<&str> = FEATURE_NAMES.to_vec();
    header.push("Revenue");
    writer.write_record(&header).context("writing header")?;

    for _ in 0..args.rows {
        writer
            .write_record(generate_session(&mut rng))
            .context("writing session")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} sessions to {}", args.rows, args.output.display());
    Ok(())
}
