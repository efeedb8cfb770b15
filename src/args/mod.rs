use crate::model::Region;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, default_value_t = 8081)]
    pub port: u16,
    /// Sqlite file backing the persistent source cache.
    #[arg(long, value_name = "CACHE_DB", default_value = "fairway_cache.db")]
    pub cache_db: PathBuf,
    /// Base URL of the feed gateway; mostly useful for pointing tests at a
    /// stub server.
    #[arg(long, value_name = "FEED_BASE_URL", default_value = "https://feeds.thefairway.bet")]
    pub feed_base_url: String,
    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
    /// Default viewer region: uk or us.
    #[arg(long, value_name = "REGION", default_value = "uk")]
    pub region: String,
}

/// Parses and validates the command line.
#[must_use]
pub fn args_checks() -> (Args, Region) {
    let args = Args::parse();
    let region = match Region::from_param(&args.region) {
        Some(region) => region,
        None => {
            eprintln!("unknown region {:?}, defaulting to uk", args.region);
            Region::Uk
        }
    };
    (args, region)
}
