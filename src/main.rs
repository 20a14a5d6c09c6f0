use std::ffi::OsString;
use std::future::Future;
use std::process::ExitCode;

use clap::Parser;

use s3_bucket_emptier::{get_client, BucketEmptier, BucketStore, S3BucketStore};

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;


/// Delete all object versions and delete markers of an S3 bucket.
#[derive(Parser, Debug)]
#[command(name = "empty_s3_bucket")]
#[command(about = "Delete all object versions and delete markers of an S3 bucket", long_about = None)]
struct Cli {
    /// Name of the bucket to empty
    bucket: String,
}

/// Parse the command line; on failure the usage/error text is printed and the exit code returned.
fn parse_cli<I, T>(args: I) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        // --help is not a failure
        if err.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS }
    })
}

/// Parse the arguments, then connect to the store and empty the bucket.
/// The store is only created once the arguments are valid.
async fn run<I, T, S, F, Fut>(args: I, connect: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: BucketStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = S>,
{
    let cli = match parse_cli(args) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let emptier = BucketEmptier::new(connect().await);
    if emptier.empty_bucket(&cli.bucket).await {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}


#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();

    let code = run(std::env::args_os(), || async { S3BucketStore::new(get_client().await) }).await;
    ExitCode::from(code)
}
