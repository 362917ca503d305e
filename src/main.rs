use anyhow::{anyhow, Result};
use clap::Parser;
use rawget::client::{fetch, TcpConnector};
use rawget::config::ClientConfig;
use rawget::logging;
use rawget::url::ParsedUrl;
use std::ffi::OsString;
use std::io;
use std::process;

const USAGE: &str = "usage: client HOSTNAME:PORT/PATH";

#[derive(Debug, Parser)]
#[command(name = "client")]
#[command(about = "Send one HTTP GET and print the raw response", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Url to fetch, with or without an `http://` prefix.
    #[arg(allow_hyphen_values = true)]
    url: OsString,
}

fn run(cli: Cli) -> Result<()> {
    let raw = cli
        .url
        .into_string()
        .map_err(|raw| anyhow!("url is not valid UTF-8: {:?}", raw))?;
    let url = ParsedUrl::parse(&raw);
    tracing::debug!(
        hostname = url.hostname(),
        port = url.port(),
        path = url.path(),
        "parsed url"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    fetch(&TcpConnector, &url, &ClientConfig::default(), &mut out)?;
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(err) = logging::init_logging() {
        eprintln!("client: {:#}", err);
    }

    if let Err(err) = run(cli) {
        eprintln!("client: {:#}", err);
        process::exit(2);
    }
}
