//! Per-table QR codes.
//!
//! Each table gets `table-<N>.png` encoding the ordering page deep link. Codes
//! are rendered on the blocking pool, one task per table; a failing table is
//! logged and does not affect the others.

mod generator;

pub use generator::{QrError, render_png, table_file_name, table_url};

use std::path::PathBuf;

use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info, warn};

use crate::config::QrConfig;

/// Outcome of one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QrSummary {
    pub generated: u32,
    pub failed: u32,
}

/// Handle over the running generation tasks.
///
/// Dropping the handle aborts tables that have not started rendering yet.
/// Call [`wait`](Self::wait) or [`detach`](Self::detach) to let them finish.
pub struct QrGenerationHandle {
    tasks: JoinSet<(u32, Result<PathBuf, QrError>)>,
}

impl QrGenerationHandle {
    /// Wait for every table and report how many codes were written.
    pub async fn wait(mut self) -> QrSummary {
        let mut summary = QrSummary::default();
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok((table, Ok(path))) => {
                    summary.generated += 1;
                    info!(table, path = %path.display(), "QR code generated");
                }
                Ok((table, Err(e))) => {
                    summary.failed += 1;
                    error!(table, error = %e, "Error generating QR code");
                }
                Err(e) => {
                    summary.failed += 1;
                    error!(error = %e, "QR generation task failed");
                }
            }
        }
        summary
    }

    /// Drain the tasks in the background, logging the summary when done.
    ///
    /// Aborting the returned handle drops the remaining tables.
    #[must_use]
    pub fn detach(self) -> JoinHandle<QrSummary> {
        tokio::spawn(async move {
            let summary = self.wait().await;
            if summary.failed > 0 {
                warn!(
                    generated = summary.generated,
                    failed = summary.failed,
                    "QR generation finished with failures"
                );
            } else {
                info!(generated = summary.generated, "QR generation finished");
            }
            summary
        })
    }
}

/// Start generating codes for tables `1..=cfg.table_count`, linking to the
/// server on `port`.
#[must_use]
pub fn spawn_generation(cfg: &QrConfig, port: u16) -> QrGenerationHandle {
    let mut tasks = JoinSet::new();
    for table in 1..=cfg.table_count {
        let url = table_url(&cfg.public_host, port, table);
        let path = cfg.output_dir.join(table_file_name(table));
        tasks.spawn_blocking(move || (table, render_png(&url, &path).map(|()| path)));
    }
    info!(tables = cfg.table_count, dir = %cfg.output_dir.display(), "QR generation started");
    QrGenerationHandle { tasks }
}
