use std::env;
use std::error::Error;
use std::process::ExitCode;

use sdnscreen::screen_files;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: sdnscreen <config.yaml> <candidates.json> <query.json>";

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [config, candidates, query] = args.as_slice() else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let report = screen_files(config, candidates, query)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    // Non-zero when the query hit the list so batch scripts can branch on it.
    Ok(if report.cleared {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
