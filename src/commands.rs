//! Subcommand implementations

use tracing::info;

use crate::classifier::{filter_candidate_nics, to_output_schema};
use crate::error::Result;
use crate::output::{render, NicReport, OutputFormat};
use crate::snapshot::SnapshotProvider;

/// Take one snapshot and classify it.
pub fn build_report(provider: &dyn SnapshotProvider) -> Result<NicReport> {
    let snapshot = provider.snapshot()?;
    let candidates = filter_candidate_nics(&snapshot);
    let nics = to_output_schema(&snapshot.interfaces);

    info!("{} of {} interfaces are candidates", candidates.len(), nics.len());
    Ok(NicReport::new(nics, candidates))
}

/// `list-nics`: the rendered report, ready to print
pub fn list_nics(provider: &dyn SnapshotProvider, format: OutputFormat) -> Result<String> {
    let report = build_report(provider)?;
    render(&report, format)
}
