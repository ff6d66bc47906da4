//! Best-effort handoff of URIs to the platform's default handler

/// What happened to a link handoff; only ever logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Opened { uri: String },
    Failed { uri: String, reason: String },
}

/// Open `uri` with the system handler on tokio's blocking pool
///
/// Some platform openers block until the handler exits, so the call never
/// runs on the UI thread. There is no retry.
pub async fn open_external(uri: String) -> LinkOutcome {
    let target = uri.clone();
    match tokio::task::spawn_blocking(move || open::that(&target)).await {
        Ok(Ok(())) => LinkOutcome::Opened { uri },
        Ok(Err(e)) => LinkOutcome::Failed {
            uri,
            reason: e.to_string(),
        },
        Err(e) => LinkOutcome::Failed {
            uri,
            reason: e.to_string(),
        },
    }
}

/// Record the outcome; failures are swallowed
pub fn log_outcome(outcome: &LinkOutcome) {
    match outcome {
        LinkOutcome::Opened { uri } => tracing::debug!("Opened {}", uri),
        LinkOutcome::Failed { uri, reason } => {
            tracing::debug!("Could not open {}: {}", uri, reason)
        }
    }
}
