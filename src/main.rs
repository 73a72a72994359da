use clap::Parser;
use hang_fds::cli::Args;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    hang_fds::logging::init();

    // Help and usage errors exit from here with clap's status codes.
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let (count, endpoint) = args.validate()?;

    hang_fds::metrics::init_metrics();
    let summary = hang_fds::hang(count, &endpoint).await?;
    tracing::debug!(?summary, "all connections ended");

    Ok(())
}
