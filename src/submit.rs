//! Submit Flow
//!
//! Validate, clear, insert, fetch. Any failure returns the flow to `Idle`
//! without retrying or rolling back the remote side.

use crate::editor::validate_amounts;
use crate::error::SubmitError;
use crate::gateway::{replace_all, SchemeCollection};
use crate::models::{SchemeEntry, SchemeRow};

/// Where a submit currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Clearing,
    Inserting,
    Fetching,
    Displaying,
}

impl SubmitPhase {
    /// A request is outstanding and another submit must not start
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmitPhase::Validating | SubmitPhase::Clearing | SubmitPhase::Inserting | SubmitPhase::Fetching
        )
    }
}

/// Replace the remote collection with `entries` and read it back.
///
/// `on_phase` sees every transition, ending in `Displaying` on success or
/// `Idle` on failure. A validation failure never reaches the network.
pub async fn submit<C, F>(
    collection: &C,
    entries: &[SchemeEntry],
    mut on_phase: F,
) -> Result<Vec<SchemeRow>, SubmitError>
where
    C: SchemeCollection + ?Sized,
    F: FnMut(SubmitPhase),
{
    let result = run(collection, entries, &mut on_phase).await;
    match &result {
        Ok(rows) => {
            log::info!("[SUBMIT] Displaying {} persisted rows", rows.len());
            on_phase(SubmitPhase::Displaying);
        }
        Err(SubmitError::Validation(e)) => {
            log::warn!("[SUBMIT] Rejected: {}", e);
            on_phase(SubmitPhase::Idle);
        }
        Err(e) => {
            log::error!("[SUBMIT] {}", e);
            on_phase(SubmitPhase::Idle);
        }
    }
    result
}

async fn run<C, F>(
    collection: &C,
    entries: &[SchemeEntry],
    on_phase: &mut F,
) -> Result<Vec<SchemeRow>, SubmitError>
where
    C: SchemeCollection + ?Sized,
    F: FnMut(SubmitPhase),
{
    on_phase(SubmitPhase::Validating);
    validate_amounts(entries)?;

    on_phase(SubmitPhase::Clearing);
    let deleted = collection
        .clear()
        .await
        .map_err(|source| SubmitError::Sync { stage: SubmitPhase::Clearing, source })?;
    log::debug!("[SUBMIT] Cleared collection ({:?} rows)", deleted);

    on_phase(SubmitPhase::Inserting);
    let inserted = replace_all(collection, entries)
        .await
        .map_err(|source| SubmitError::Sync { stage: SubmitPhase::Inserting, source })?;
    log::debug!("[SUBMIT] Inserted {} rows", inserted.len());

    on_phase(SubmitPhase::Fetching);
    collection
        .fetch_all()
        .await
        .map_err(|source| SubmitError::Sync { stage: SubmitPhase::Fetching, source })
}
