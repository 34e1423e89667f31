use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::{debug, info, warn, LevelFilter};

use bgp_participants::{config, write_table, Extractor, ExtractorConfig, OutputFormat};

#[derive(Parser, Debug)]
#[clap(name = "find-participants", rename_all = "kebab-case")]
/// Find BGP neighbors using participant import policies in a directory of Junos configs
struct Args {
    /// Directory of router configs
    config_dir: PathBuf,
    /// Path to extractor settings (TOML)
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Config file extension to scan (defaults to "cfg")
    #[clap(short, long)]
    extension: Option<String>,
    /// Output format [initializer, table, json]
    #[clap(short, long, default_value = "initializer")]
    format: OutputFormat,
    /// Log and skip configs that can't be read
    #[clap(long)]
    skip_unreadable: bool,
    /// Show debug logs (additive for trace logs)
    #[clap(short, parse(from_occurrences))]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => config::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    if let Some(extension) = &args.extension {
        config = config.with_extension(extension);
    }
    config.skip_unreadable |= args.skip_unreadable;
    debug!("Using config: {:?}", config);

    let mut extractor = Extractor::new(&config);
    extractor.add_dir(&args.config_dir, |overwrite| match args.format {
        // Keep JSON output parseable
        OutputFormat::Json => warn!("{}", overwrite),
        _ => println!("{}", overwrite),
    })?;
    let table = extractor.finish();
    info!("Found {} participant neighbors", table.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&table, args.format, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let (crate_level, other_level) = match args.verbose {
        0 => (LevelFilter::Info, LevelFilter::Warn),
        1 => (LevelFilter::Debug, LevelFilter::Warn),
        2 => (LevelFilter::Trace, LevelFilter::Warn),
        _ => (LevelFilter::Trace, LevelFilter::Trace),
    };
    Builder::new()
        .filter(Some("bgp_participants"), crate_level)
        .filter(Some("find_participants"), crate_level)
        .filter(None, other_level)
        .init();
    debug!("Logging at levels {}/{}", crate_level, other_level);

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
