use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use docframe::engine::document::ExtJsonLinesCursor;
use docframe::engine::query::{QueryMode, QueryOptions, execute};
use docframe::engine::series::SeriesPolicy;
use docframe::logging;
use docframe::shared::config::CONFIG;
use docframe::shared::response::{OutputFormat, renderer_for};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "docframe", version)]
#[command(about = "Turn extended JSON documents into typed frames", long_about = None)]
struct Args {
    /// Extended JSON lines file, one document per line. Use `-` for stdin.
    input: String,

    /// table or timeseries
    #[arg(short, long, default_value = "table")]
    mode: QueryMode,

    /// Name of the table frame. Falls back to the configured name.
    #[arg(short, long)]
    name: Option<String>,

    /// text, json or arrow. Falls back to the configured format.
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Skip invalid time-series rows instead of failing
    #[arg(long)]
    lenient: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn open_input(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    }
    let file = File::open(input).with_context(|| format!("cannot open input {input}"))?;
    Ok(Box::new(BufReader::new(file)))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG)?;

    let settings = &*CONFIG;
    let options = QueryOptions {
        mode: args.mode,
        frame_name: args
            .name
            .unwrap_or_else(|| settings.transcode.table_frame_name.clone()),
        series_policy: if args.lenient {
            SeriesPolicy::Lenient
        } else {
            settings.transcode.series_policy
        },
    };

    let mut cursor = ExtJsonLinesCursor::new(open_input(&args.input)?);
    let frames = execute(&mut cursor, &options)?;
    info!(input = %args.input, lines = cursor.lines_read(), "Input consumed");

    let format = args.format.unwrap_or(settings.output.format);
    let bytes = renderer_for(format, settings.output.max_cell_width).render(&frames)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &bytes).with_context(|| format!("cannot write {}", path.display()))?
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
