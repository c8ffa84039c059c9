// src/mutate.rs
use crate::config::TimeoutPolicy;
use crate::core::net::Transport;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::query::GraphQuery;

/// Outcome of the POST loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationSummary {
    pub total: usize,
    pub applied: usize,
    /// Icons whose POST timed out under `TimeoutPolicy::Skip`.
    pub skipped: Vec<String>,
}

/// POST every query to `url`, one at a time, in order.
///
/// Any non-timeout failure ends the loop with `Error::PostFailed`. A timeout
/// ends it with `Error::PostTimeout` under `Stop`, or is recorded and skipped
/// under `Skip`. Queries already sent stay applied either way.
pub fn push_queries(
    transport: &dyn Transport,
    url: &str,
    queries: &[GraphQuery],
    on_timeout: TimeoutPolicy,
    progress: &mut dyn Progress,
) -> Result<MutationSummary> {
    let mut summary = MutationSummary { total: queries.len(), ..Default::default() };
    progress.begin(summary.total);

    for q in queries {
        logd!("POST {url}: {}", q.text);
        match transport.post_text(url, &q.text) {
            Ok(()) => {
                summary.applied += 1;
                progress.item_done(q.icon.as_str());
            }
            Err(e) if e.is_timeout() && on_timeout == TimeoutPolicy::Skip => {
                logw!("timed out creating icon `{}`; skipped", q.icon);
                progress.item_failed(q.icon.as_str(), &e.to_string());
                summary.skipped.push(q.icon.as_str().to_string());
            }
            Err(e) => {
                loge!("creating icon `{}` failed: {e}", q.icon);
                progress.item_failed(q.icon.as_str(), &e.to_string());
                progress.finish();
                let (icon, applied, total) = (q.icon.to_string(), summary.applied, summary.total);
                return Err(if e.is_timeout() {
                    Error::PostTimeout { icon, applied, total }
                } else {
                    Error::PostFailed { icon, applied, total, source: e }
                });
            }
        }
    }

    progress.finish();
    logf!(
        "created {}/{} icon nodes ({} skipped)",
        summary.applied,
        summary.total,
        summary.skipped.len()
    );
    Ok(summary)
}
