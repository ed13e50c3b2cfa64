use crate::domain::model::{NormalizedRecord, RawRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to one configured domain's source table.
#[async_trait]
pub trait SourcePort: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>>;
}

/// Append-only access to one configured domain's target table. No update or
/// delete semantics are required by the core.
#[async_trait]
pub trait TargetPort: Send + Sync {
    async fn insert_all(&self, rows: &[NormalizedRecord]) -> Result<()>;
}
