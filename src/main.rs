use anyhow::{bail, Context, Result};
use lastfmx::lastfm::lookup_method;
use lastfmx::MethodDescriptor;
use lastfmx::{create_lastfm_client, LastfmConfig};
use serde_json::{Map, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: lastfmx <group.method> [value ...] [key=value ...]\n       lastfmx auth";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((method, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    // Reads LASTFM_API_KEY, LASTFM_SHARED_SECRET and friends
    let config = LastfmConfig::from_env_file("LASTFM").context("loading configuration")?;
    let client = create_lastfm_client(config)?;

    if method == "auth" {
        let token = client.request_token().await?;
        println!("Approve access at:\n  {}", client.authorization_url(&token)?);
        println!("Press Enter once done.");

        let mut line = String::new();
        BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;

        let session_key = client.complete_authorization(&token).await?;
        println!("LASTFM_SESSION_KEY={}", session_key);
        return Ok(());
    }

    let descriptor =
        lookup_method(method).with_context(|| format!("unknown method '{}'\n{}", method, USAGE))?;

    let (positional, keyword) = split_arguments(descriptor, rest);

    let records = client.call(descriptor, &positional, &keyword).await?;

    let rows: Vec<Value> = records
        .iter()
        .map(|record| {
            let fields: Map<String, Value> = record
                .labeled(descriptor)
                .into_iter()
                .map(|(label, value)| (label, Value::String(value.to_string())))
                .collect();
            Value::Object(fields)
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Split command line values into positional values and keyword overrides
///
/// `name=value` is a keyword only when `name` is an optional parameter of the
/// method; anything else, `=` included, stays positional.
fn split_arguments<'a>(
    descriptor: &MethodDescriptor,
    args: &'a [String],
) -> (Vec<&'a str>, Vec<(&'a str, &'a str)>) {
    let mut positional = Vec::new();
    let mut keyword = Vec::new();

    for arg in args {
        match arg.split_once('=') {
            Some((name, value)) if descriptor.accepts_keyword(name) => keyword.push((name, value)),
            _ => positional.push(arg.as_str()),
        }
    }

    (positional, keyword)
}
