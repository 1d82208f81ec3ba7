use std::path::PathBuf;

use clap::Parser;

/// Command line arguments of the `inspect` binary.
#[derive(Debug, Parser)]
#[command(name = "inspect")]
#[command(bin_name = "inspect")]
#[command(about = "Explain how the grading site resolves a request", long_about = None)]
pub struct InspectCli {
    /// JSON roster of users, courses, teaching and enrolments
    #[arg(long, env = "DEMOGRADER_ROSTER")]
    pub roster: PathBuf,

    /// JSON endpoint catalog; the standard catalog when omitted
    #[arg(long, env = "DEMOGRADER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Endpoint whose requirements apply
    #[arg(short, long, default_value = "home")]
    pub endpoint: String,

    /// Email held by the session
    #[arg(short, long)]
    pub session: Option<String>,

    /// Email to view the page as
    #[arg(long)]
    pub viewer: Option<String>,

    /// Role to view the page at
    #[arg(long)]
    pub role: Option<String>,

    /// Course the request is scoped to
    #[arg(long)]
    pub course: Option<u64>,

    /// Restrict the endpoint to this user id
    #[arg(long)]
    pub user: Option<u64>,
}
