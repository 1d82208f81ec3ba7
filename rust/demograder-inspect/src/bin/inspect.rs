use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use demograder_inspect::{InspectCli, init_tracing, inspect};

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = InspectCli::parse();
    let report = inspect(&cli).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.is_refused() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
