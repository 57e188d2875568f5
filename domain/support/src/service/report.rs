use async_trait::async_trait;

use crate::command::NewReport;
use crate::exception::SupportResult;
use crate::model::entity::NonConformityReport;

#[async_trait]
pub trait ReportService: Send + Sync {
    /// Creates the report and provisions its attachment folder on the
    /// drive when the integration is configured. Provisioning failures
    /// are logged, not fatal.
    async fn create(&self, report: NewReport) -> SupportResult<NonConformityReport>;
    async fn get(&self, id: i64) -> SupportResult<NonConformityReport>;
    async fn list(&self) -> SupportResult<Vec<NonConformityReport>>;
    /// Closing an already closed report is a no-op. The caller is
    /// recorded in the audit log.
    async fn close(&self, id: i64, caller: &str) -> SupportResult<NonConformityReport>;
}
