use clap::Parser;
use spatial_args::shape::{SimpleShape, SimpleShapeReader};
use spatial_args::SpatialArgs;
use std::io::BufRead;

/// Check spatial query arguments, one per argument or per line of stdin.
#[derive(Parser, Debug)]
#[command(name = "spatial-args", version)]
struct Cli {
	/// Queries such as `Intersects(POINT(30 10)) cache=false`
	queries: Vec<String>,

	/// Also require an area-bearing shape where the operation needs one
	#[arg(long)]
	validate: bool,

	/// Only report failures
	#[arg(short, long)]
	quiet: bool,
}

fn check(query: &str, validate: bool) -> Result<SpatialArgs<SimpleShape>, anyhow::Error> {
	let args = SpatialArgs::parse(query, &SimpleShapeReader).map_err(|e| anyhow::anyhow!("{}", e))?;
	if validate {
		args.validate()?;
	}
	Ok(args)
}

fn main() -> Result<(), anyhow::Error> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let cli = Cli::parse();

	let queries = if cli.queries.is_empty() {
		let mut lines = Vec::new();
		for line in std::io::stdin().lock().lines() {
			let line = line?;
			if !line.trim().is_empty() {
				lines.push(line);
			}
		}
		lines
	} else {
		cli.queries
	};

	let mut failed = 0;
	for query in &queries {
		match check(query, cli.validate) {
			Ok(args) => {
				if !cli.quiet {
					println!("ok\t{}", args);
				}
			}
			Err(err) => {
				failed += 1;
				log::debug!("rejected {:?}", query);
				println!("error\t{}\t{}", query, err);
			}
		}
	}

	if failed > 0 {
		anyhow::bail!("{} of {} queries failed", failed, queries.len());
	}
	return Ok(());
}
