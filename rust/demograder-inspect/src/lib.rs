//! Tooling that replays a single request through the access gate.
//!
//! The `inspect` binary loads a roster and an endpoint catalog, builds the
//! request described by its arguments and prints the [`Report`] as JSON.

#![warn(missing_docs)]

use std::path::Path;

use anyhow::{Context, Result};
use demograder_access::{AccessGate, Admission, Catalog, CourseId, Request, UserId};
use demograder_directory::{MemoryDirectory, Roster};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
pub use cli::*;

/// What happened to the replayed request.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Report {
    /// The gate let the request through.
    Admitted {
        /// Endpoint whose requirements applied.
        endpoint: String,
        /// What the gate resolved.
        admission: Admission,
    },
    /// The gate refused the request.
    Refused {
        /// Endpoint whose requirements applied.
        endpoint: String,
        /// HTTP status the site would respond with.
        status: u16,
        /// Stable refusal code, e.g. `FORBIDDEN_SCOPE`.
        code: &'static str,
        /// Human readable cause.
        reason: String,
    },
}

impl Report {
    /// Whether the request was refused.
    pub fn is_refused(&self) -> bool {
        matches!(self, Report::Refused { .. })
    }
}

/// Send log events to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Read a JSON roster from `path` into a fresh [`MemoryDirectory`].
pub async fn load_directory(path: &Path) -> Result<MemoryDirectory> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read roster: {}", path.display()))?;
    let roster = Roster::from_json(&json).with_context(|| "parse roster")?;
    MemoryDirectory::from_roster(roster).with_context(|| "load roster")
}

/// Read the endpoint catalog at `path`, or the standard catalog when no
/// path is given.
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::standard());
    };
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read catalog: {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| "parse catalog")
}

impl InspectCli {
    /// The request described by the command line.
    pub fn request(&self) -> Request {
        let mut request = Request::anonymous();
        request.session = self.session.clone();
        request.query.viewer = self.viewer.clone();
        request.query.role = self.role.clone();
        request.course_id = self.course.map(CourseId);
        request
    }
}

/// Load the roster and catalog named by `cli` and run its request through
/// the gate.
pub async fn inspect(cli: &InspectCli) -> Result<Report> {
    let directory = load_directory(&cli.roster).await?;
    let catalog = load_catalog(cli.catalog.as_deref()).await?;

    if catalog.get(&cli.endpoint).is_none() {
        tracing::warn!(endpoint = %cli.endpoint, "Endpoint not in catalog; using default requirements");
    }
    let mut requirements = catalog.requirements(&cli.endpoint);
    if let Some(user) = cli.user {
        requirements = requirements.for_user(UserId(user));
    }

    let gate = AccessGate::new(directory);
    let endpoint = cli.endpoint.clone();

    Ok(match gate.admit(&cli.request(), &requirements).await {
        Ok(admission) => Report::Admitted {
            endpoint,
            admission,
        },
        Err(abort) => Report::Refused {
            endpoint,
            status: abort.status_code(),
            code: abort.code(),
            reason: abort.to_string(),
        },
    })
}
