use async_trait::async_trait;

use crate::command::NewReport;
use crate::model::entity::NonConformityReport;

#[async_trait]
pub trait ReportRepo: Send + Sync {
    async fn insert(&self, report: &NewReport) -> anyhow::Result<NonConformityReport>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<NonConformityReport>>;
    async fn get_all(&self) -> anyhow::Result<Vec<NonConformityReport>>;
    async fn update(&self, report: &NonConformityReport) -> anyhow::Result<()>;
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
