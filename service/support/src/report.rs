use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_notify::service::DriveService;
use domain_support::{
    command::NewReport,
    exception::{SupportException, SupportResult},
    model::entity::{NonConformityReport, ReportStatus},
    repository::ReportRepo,
    service::ReportService,
};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct ReportServiceImpl {
    report_repo: Arc<dyn ReportRepo>,
    /// Absent when the Graph integration is disabled.
    #[builder(default)]
    drive: Option<Arc<dyn DriveService>>,
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn create(&self, report: NewReport) -> SupportResult<NonConformityReport> {
        // The report is committed before provisioning so a Graph outage
        // cannot lose it.
        let mut report = self.report_repo.insert(&report).await?;
        self.report_repo.save_changed().await?;

        if let Some(drive) = &self.drive {
            match drive.ensure_folder(&format!("NCR-{}", report.id)).await {
                Ok(folder) => {
                    report.drive_folder = Some(folder.id);
                    self.report_repo.update(&report).await?;
                    self.report_repo.save_changed().await?;
                }
                Err(e) => {
                    tracing::warn!(report_id = report.id, "drive folder provisioning failed: {e}");
                }
            }
        }
        Ok(report)
    }

    async fn get(&self, id: i64) -> SupportResult<NonConformityReport> {
        self.report_repo
            .find_by_id(id)
            .await?
            .ok_or(SupportException::ReportNotFound { id })
    }

    async fn list(&self) -> SupportResult<Vec<NonConformityReport>> {
        Ok(self.report_repo.get_all().await?)
    }

    async fn close(&self, id: i64, caller: &str) -> SupportResult<NonConformityReport> {
        let mut report = self.get(id).await?;
        if report.status == ReportStatus::Closed {
            return Ok(report);
        }
        report.status = ReportStatus::Closed;
        report.closed_at = Some(Utc::now());
        self.report_repo.update(&report).await?;
        self.report_repo.save_changed().await?;
        tracing::info!(report_id = id, caller, "report closed");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_notify::mock::MockDriveService;
    use domain_notify::model::vo::DriveFolder;
    use domain_support::mock::MockReportRepo;
    use domain_support::model::entity::ReportSeverity;

    fn new_report() -> NewReport {
        NewReport {
            title: "Mislabelled drums on line 2".into(),
            description: "Batch 2208 left the line without hazard labels.".into(),
            department_id: Some(4),
            severity: ReportSeverity::Major,
            reporter: Some("u-8".into()),
        }
    }

    fn stored_report(id: i64) -> NonConformityReport {
        NonConformityReport {
            id,
            title: "Mislabelled drums on line 2".into(),
            description: "Batch 2208 left the line without hazard labels.".into(),
            department_id: Some(4),
            severity: ReportSeverity::Major,
            status: ReportStatus::Open,
            reporter: Some("u-8".into()),
            drive_folder: None,
            created_at: Utc::now(),
            closed_at: None,
        }
    }

    #[tokio::test]
    async fn create_provisions_a_folder_named_after_the_report() {
        let mut report_repo = MockReportRepo::new();
        report_repo.expect_insert().once().returning(|_| Ok(stored_report(9)));
        report_repo
            .expect_update()
            .withf(|r| r.drive_folder.as_deref() == Some("item-123"))
            .once()
            .returning(|_| Ok(()));
        report_repo.expect_save_changed().times(2).returning(|| Ok(true));
        let mut drive = MockDriveService::new();
        drive.expect_ensure_folder().withf(|name| name == "NCR-9").once().returning(|_| {
            Ok(DriveFolder {
                id: "item-123".into(),
                web_url: None,
            })
        });

        let service = ReportServiceImpl::builder()
            .report_repo(Arc::new(report_repo))
            .drive(Some(Arc::new(drive) as Arc<dyn DriveService>))
            .build();

        let report = service.create(new_report()).await.unwrap();
        assert_eq!(report.drive_folder.as_deref(), Some("item-123"));
    }

    #[tokio::test]
    async fn provisioning_failure_keeps_the_report() {
        let mut report_repo = MockReportRepo::new();
        report_repo.expect_insert().once().returning(|_| Ok(stored_report(9)));
        report_repo.expect_update().never();
        report_repo.expect_save_changed().once().returning(|| Ok(true));
        let mut drive = MockDriveService::new();
        drive
            .expect_ensure_folder()
            .once()
            .returning(|_| Err(anyhow::anyhow!("graph unavailable")));

        let service = ReportServiceImpl::builder()
            .report_repo(Arc::new(report_repo))
            .drive(Some(Arc::new(drive) as Arc<dyn DriveService>))
            .build();

        let report = service.create(new_report()).await.unwrap();
        assert_eq!(report.drive_folder, None);
    }

    #[tokio::test]
    async fn closing_twice_is_a_no_op() {
        let mut report_repo = MockReportRepo::new();
        report_repo.expect_find_by_id().returning(|id| {
            let mut report = stored_report(id);
            report.status = ReportStatus::Closed;
            report.closed_at = Some(Utc::now());
            Ok(Some(report))
        });
        report_repo.expect_update().never();

        let service = ReportServiceImpl::builder().report_repo(Arc::new(report_repo)).build();

        let report = service.close(9, "qa-lead").await.unwrap();
        assert_eq!(report.status, ReportStatus::Closed);
    }

    #[tokio::test]
    async fn closing_an_open_report_commits_the_transition() {
        let mut report_repo = MockReportRepo::new();
        report_repo.expect_find_by_id().return_once(|id| Ok(Some(stored_report(id))));
        report_repo
            .expect_update()
            .withf(|r| r.status == ReportStatus::Closed && r.closed_at.is_some())
            .once()
            .returning(|_| Ok(()));
        report_repo.expect_save_changed().once().returning(|| Ok(true));

        let service = ReportServiceImpl::builder().report_repo(Arc::new(report_repo)).build();

        let report = service.close(9, "qa-lead").await.unwrap();
        assert_eq!(report.status, ReportStatus::Closed);
    }
}
