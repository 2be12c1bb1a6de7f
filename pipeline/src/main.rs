use std::env;

use matrix_engine::Multiplier;
use matrix_pipeline::SessionConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).cloned().unwrap_or_default();

    match mode.as_str() {
        "multiply" => {
            let file_a = args.get(2).ok_or("missing file for matrix A")?;
            let file_b = args.get(3).ok_or("missing file for matrix B")?;
            let out = args.get(4).ok_or("missing output file")?;

            let a = matrix_pipeline::io::load(file_a).await?;
            let b = matrix_pipeline::io::load(file_b).await?;
            let multiplier = multiplier_for(args.get(5))?;

            let product = multiplier.multiply(a, b).await?;
            matrix_pipeline::io::store(out, &product).await?;
            println!(
                "Result ({}x{}) written to {}",
                product.rows(),
                product.cols(),
                out
            );
        }
        "trace" => {
            let file_a = args.get(2).ok_or("missing file for matrix A")?;
            let file_b = args.get(3).ok_or("missing file for matrix B")?;
            let partials_file = args.get(4).ok_or("missing partials file")?;
            let out = args.get(5).ok_or("missing output file")?;

            let a = matrix_pipeline::io::load(file_a).await?;
            let b = matrix_pipeline::io::load(file_b).await?;
            let multiplier = multiplier_for(args.get(6))?;

            let mut lines = Vec::new();
            let product = multiplier
                .multiply_observed(a, b, |partial| {
                    lines.push(format!("{} {} {}", partial.row, partial.col, partial.value));
                })
                .await?;

            tokio::fs::write(partials_file, lines.join("\n") + "\n").await?;
            matrix_pipeline::io::store(out, &product).await?;
            println!(
                "Result written to {}, {} partial results to {}",
                out,
                lines.len(),
                partials_file
            );
        }
        "stream" => {
            let size: usize = args.get(2).ok_or("missing matrix size")?.parse()?;
            let count_a: usize = args.get(3).ok_or("missing matrix count")?.parse()?;
            let count_b: usize = match args.get(4) {
                Some(raw) => raw.parse()?,
                None => count_a,
            };

            let mut config = SessionConfig::new(size, count_a, count_b);
            config.pool_size = pool_size_from(args.get(5));

            let completed = matrix_pipeline::run(config).await?;
            println!("Completed {} matrix pairs", completed);
        }
        _ => {
            eprintln!("Usage: {} <mode> [args...]", args[0]);
            eprintln!("Modes:");
            eprintln!("  multiply <a> <b> <out> [pool]          - multiply matrices from files");
            eprintln!("  trace <a> <b> <partials> <out> [pool]  - multiply, logging partial results");
            eprintln!("  stream <size> <count_a> [count_b] [pool] - generate and multiply pairs");
            eprintln!();
            eprintln!("Pool size falls back to the POOL_SIZE environment variable,");
            eprintln!("then to the host's available parallelism.");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn multiplier_for(arg: Option<&String>) -> Result<Multiplier, matrix_engine::Error> {
    match pool_size_from(arg) {
        Some(size) => Multiplier::new(size),
        None => Ok(Multiplier::default()),
    }
}

fn pool_size_from(arg: Option<&String>) -> Option<usize> {
    if let Some(raw) = arg {
        return raw.parse().ok();
    }
    env::var("POOL_SIZE").ok().and_then(|raw| raw.parse().ok())
}
