use crate::core::transform;
use crate::domain::model::{Domain, NormalizedRecord};
use crate::domain::ports::{SourcePort, TargetPort};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// One configured domain: where raw rows come from, where the normalized
/// batch goes, and the tag stamped onto every produced record.
pub struct DomainPipeline {
    pub source: Box<dyn SourcePort>,
    pub target: Box<dyn TargetPort>,
    pub tag: Domain,
}

/// Per-domain observability counters for one run.
#[derive(Debug, Clone, Serialize)]
pub struct DomainReport {
    pub domain: Domain,
    pub rows_processed: usize,
    pub unparsed_dates: usize,
    pub unparsed_datetimes: usize,
}

/// A domain whose collaborator failed mid-pipeline. The remaining domains
/// still run; the error is kept for the caller.
#[derive(Debug)]
pub struct DomainFailure {
    pub domain: Domain,
    pub error: EtlError,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub domains: Vec<DomainReport>,
    pub failures: Vec<DomainFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.domains.iter().map(|d| d.rows_processed).sum()
    }

    /// Execution summary in the shape the CLI logs after a run.
    pub fn summary(&self) -> HashMap<String, serde_json::Value> {
        let loaded: Vec<serde_json::Value> = self
            .domains
            .iter()
            .map(|d| serde_json::Value::String(d.domain.to_string()))
            .collect();
        let failed: Vec<serde_json::Value> = self
            .failures
            .iter()
            .map(|f| serde_json::Value::String(f.domain.to_string()))
            .collect();
        let unparsed_dates: usize = self.domains.iter().map(|d| d.unparsed_dates).sum();
        let unparsed_datetimes: usize = self.domains.iter().map(|d| d.unparsed_datetimes).sum();

        let mut summary = HashMap::new();
        summary.insert(
            "total_rows".to_string(),
            serde_json::Value::Number(self.total_rows().into()),
        );
        summary.insert(
            "unparsed_dates".to_string(),
            serde_json::Value::Number(unparsed_dates.into()),
        );
        summary.insert(
            "unparsed_datetimes".to_string(),
            serde_json::Value::Number(unparsed_datetimes.into()),
        );
        summary.insert(
            "loaded_domains".to_string(),
            serde_json::Value::Array(loaded),
        );
        summary.insert(
            "failed_domains".to_string(),
            serde_json::Value::Array(failed),
        );
        summary
    }
}

/// Sequences extraction, transformation, and load for each configured domain
/// in order, single pass, no retries.
pub struct EtlEngine {
    pipelines: Vec<DomainPipeline>,
}

impl EtlEngine {
    pub fn new(pipelines: Vec<DomainPipeline>) -> Self {
        Self { pipelines }
    }

    /// Runs every configured domain. Domains are isolated: a collaborator
    /// failure is recorded in the report and the remaining domains still run.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::default();

        for pipeline in &self.pipelines {
            match self.run_domain(pipeline).await {
                Ok(domain_report) => {
                    tracing::info!(
                        domain = %domain_report.domain,
                        rows = domain_report.rows_processed,
                        unparsed_dates = domain_report.unparsed_dates,
                        unparsed_datetimes = domain_report.unparsed_datetimes,
                        "domain loaded"
                    );
                    report.domains.push(domain_report);
                }
                Err(error) => {
                    tracing::error!(domain = %pipeline.tag, %error, "domain pipeline failed");
                    report.failures.push(DomainFailure {
                        domain: pipeline.tag,
                        error,
                    });
                }
            }
        }

        report
    }

    async fn run_domain(&self, pipeline: &DomainPipeline) -> Result<DomainReport> {
        tracing::debug!(domain = %pipeline.tag, "extracting");
        let raw_rows = pipeline.source.fetch_all().await?;

        tracing::debug!(domain = %pipeline.tag, rows = raw_rows.len(), "transforming");
        let batch: Vec<NormalizedRecord> = raw_rows
            .iter()
            .map(|row| transform::transform(row, pipeline.tag))
            .collect();

        let unparsed_dates = batch.iter().filter(|r| r.dateofbirth.is_none()).count();
        let unparsed_datetimes = batch
            .iter()
            .filter(|r| r.registrationdate.is_none())
            .count();

        tracing::debug!(domain = %pipeline.tag, rows = batch.len(), "loading");
        pipeline.target.insert_all(&batch).await?;

        Ok(DomainReport {
            domain: pipeline.tag,
            rows_processed: batch.len(),
            unparsed_dates,
            unparsed_datetimes,
        })
    }
}
