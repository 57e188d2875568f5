use std::sync::Arc;

use domain_content::service::{BannerService, DepartmentService, FavoriteService};
use domain_notify::service::{DriveService, MailSender, MailService};
use domain_support::service::{FeedbackService, ReportService, TicketService};
use handlebars::Handlebars;
use service_content::{BannerServiceImpl, DepartmentServiceImpl, FavoriteServiceImpl};
use service_notify::{
    template_registry, ClientCredentialsFetcher, GraphDriveService, GraphTokenCache,
    LogMailSender, MailServiceImpl,
};
use service_support::{FeedbackServiceImpl, ReportServiceImpl, TicketServiceImpl};

use super::config::AdminConfig;
use super::database::{Database, OrmRepo};

/// Holds the long-lived pieces and wires request-scoped services on
/// demand. Each `*_service` call creates one `OrmRepo`, so every
/// repository a service sees shares the same unit of work.
pub struct ServiceProvider {
    config: AdminConfig,
    database: Arc<Database>,
    templates: Arc<Handlebars<'static>>,
    sender: Arc<dyn MailSender>,
    drive: Option<Arc<dyn DriveService>>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config: AdminConfig = config.try_deserialize()?;
        let database = Arc::new(Database::new(config.db().url()).await?);
        let templates = Arc::new(template_registry()?);
        let sender: Arc<dyn MailSender> = Arc::new(LogMailSender);

        let graph = config.graph();
        let drive: Option<Arc<dyn DriveService>> = if *graph.enable() {
            let client = reqwest::Client::new();
            let fetcher = ClientCredentialsFetcher::builder()
                .client(client.clone())
                .token_url(graph.token_url())
                .client_id(graph.client_id().clone())
                .client_secret(graph.client_secret().clone())
                .build();
            Some(Arc::new(
                GraphDriveService::builder()
                    .client(client)
                    .tokens(GraphTokenCache::new(Arc::new(fetcher)))
                    .drive_id(graph.drive_id().clone())
                    .build(),
            ))
        } else {
            None
        };

        Ok(Self {
            config,
            database,
            templates,
            sender,
            drive,
        })
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    fn orm_repo(&self) -> Arc<OrmRepo> {
        Arc::new(OrmRepo::builder().db(self.database.clone()).build())
    }

    pub fn feedback_service(&self) -> Arc<dyn FeedbackService> {
        let repo = self.orm_repo();
        Arc::new(
            FeedbackServiceImpl::builder()
                .ticket_repo(repo.clone())
                .feedback_repo(repo.clone())
                .history_repo(repo)
                .build(),
        )
    }

    pub fn ticket_service(&self) -> Arc<dyn TicketService> {
        let repo = self.orm_repo();
        Arc::new(
            TicketServiceImpl::builder().ticket_repo(repo.clone()).history_repo(repo).build(),
        )
    }

    pub fn report_service(&self) -> Arc<dyn ReportService> {
        Arc::new(
            ReportServiceImpl::builder()
                .report_repo(self.orm_repo())
                .drive(self.drive.clone())
                .build(),
        )
    }

    pub fn department_service(&self) -> Arc<dyn DepartmentService> {
        Arc::new(DepartmentServiceImpl::builder().department_repo(self.orm_repo()).build())
    }

    pub fn banner_service(&self) -> Arc<dyn BannerService> {
        Arc::new(BannerServiceImpl::builder().banner_repo(self.orm_repo()).build())
    }

    pub fn favorite_service(&self) -> Arc<dyn FavoriteService> {
        Arc::new(FavoriteServiceImpl::builder().favorite_repo(self.orm_repo()).build())
    }

    pub fn mail_service(&self) -> Arc<dyn MailService> {
        Arc::new(
            MailServiceImpl::builder()
                .notification_repo(self.orm_repo())
                .templates(self.templates.clone())
                .sender(self.sender.clone())
                .from(self.config.mail().from().clone())
                .build(),
        )
    }
}
