//! `submit` and `validate` command handlers.
//!
//! A responses file is one researcher session. Samples that fail intake are
//! reported and skipped so one bad entry does not discard the rest; relay
//! failures are reported and never stop the run.

use std::path::Path;

use influence_core::{load_responses, AppConfig, CollectionWindow};
use influence_ledger::Session;
use influence_relay::{RelayClient, RelayTarget};

/// Totals for one `submit` run.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SubmitSummary {
    pub recorded: usize,
    pub rejected: usize,
    pub relayed: usize,
    pub relay_failed: usize,
}

/// Build the session for a run, attaching a relay target when a webhook is
/// configured and relaying is not disabled.
///
/// # Errors
///
/// Returns an error if the relay HTTP client cannot be constructed.
pub(crate) fn build_session(
    config: &AppConfig,
    webhook_override: Option<&str>,
    no_relay: bool,
) -> anyhow::Result<Session> {
    let session = Session::new();
    if no_relay {
        tracing::info!("relay disabled by --no-relay; samples recorded locally only");
        return Ok(session);
    }

    let Some(endpoint) = webhook_override
        .map(str::to_owned)
        .or_else(|| config.webhook_url.clone())
    else {
        tracing::info!("no webhook configured; samples recorded locally only");
        return Ok(session);
    };

    let client = RelayClient::new(config.relay_timeout_secs, &config.relay_user_agent)?;
    Ok(session.with_relay(RelayTarget::new(client, endpoint)))
}

/// Record every sample in `file`, relay each one, then write the CSV export.
///
/// The export is written even when some samples were rejected; an empty
/// session produces a header-only file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, the relay client cannot be
/// built, or the export cannot be written. Per-sample failures are reported,
/// not propagated.
pub(crate) async fn run_submit(
    config: &AppConfig,
    file: &Path,
    webhook_override: Option<&str>,
    out_override: Option<&Path>,
    no_relay: bool,
) -> anyhow::Result<SubmitSummary> {
    let responses = load_responses(file)?;
    let mut session = build_session(config, webhook_override, no_relay)?;
    session.set_context(responses.context);

    let total = responses.samples.len();
    let mut summary = SubmitSummary::default();

    for (idx, form) in responses.samples.into_iter().enumerate() {
        let n = idx + 1;
        match session.submit(form).await {
            Ok(submission) => {
                summary.recorded += 1;
                if submission.relay.is_relayed() {
                    summary.relayed += 1;
                } else if submission.relay.is_failed() {
                    summary.relay_failed += 1;
                }
                println!(
                    "sample {n}/{total}: recorded as row {}. {}",
                    submission.position + 1,
                    submission.relay.user_message()
                );
            }
            Err(e) => {
                summary.rejected += 1;
                tracing::warn!(sample = n, error = %e, "sample skipped");
                println!("sample {n}/{total}: not recorded: {e}");
            }
        }
    }

    let out = out_override.unwrap_or(&config.export_path);
    session.ledger().write_csv(out)?;
    println!(
        "exported {} samples to {}",
        session.ledger().len(),
        out.display()
    );

    if summary.rejected > 0 || summary.relay_failed > 0 {
        tracing::warn!(
            rejected = summary.rejected,
            relay_failed = summary.relay_failed,
            total,
            "session finished with problems"
        );
    }

    Ok(summary)
}

/// Check every sample in `file` against the questionnaire constraints.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or any sample is invalid.
pub(crate) fn run_validate(file: &Path) -> anyhow::Result<()> {
    let responses = load_responses(file)?;
    let window = CollectionWindow::STUDY;
    let total = responses.samples.len();
    let mut invalid = 0usize;

    for (idx, form) in responses.samples.into_iter().enumerate() {
        let n = idx + 1;
        match form.with_context(&responses.context).into_sample(&window) {
            Ok(sample) => println!(
                "sample {n}/{total}: ok ({}, {}, {})",
                sample.country, sample.media_category, sample.media_date
            ),
            Err(e) => {
                invalid += 1;
                println!("sample {n}/{total}: {e}");
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {total} samples failed validation");
    }
    println!("all {total} samples valid");
    Ok(())
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
