use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_notify::{
    command::{NewNotification, NotifyCommand},
    exception::{NotifyException, NotifyResult},
    model::entity::{DeliveryStatus, EmailNotification},
    model::vo::RenderedMail,
    repository::NotificationRepo,
    service::{MailSender, MailService},
};
use handlebars::Handlebars;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct MailServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
    templates: Arc<Handlebars<'static>>,
    sender: Arc<dyn MailSender>,
    #[builder(default = "no-reply@charlottechemical.com".into(), setter(into))]
    from: String,
}

impl MailServiceImpl {
    /// Marks the row failed and commits before surfacing the error, so
    /// the outcome is visible even when the caller only sees a 4xx/5xx.
    async fn fail(&self, id: i64, error: NotifyException) -> NotifyException {
        let marked = async {
            self.notification_repo.mark_failed(id, &error.to_string()).await?;
            self.notification_repo.save_changed().await?;
            anyhow::Ok(())
        }
        .await;
        if let Err(e) = marked {
            tracing::error!(notification_id = id, "could not record delivery failure: {e}");
        }
        error
    }
}

#[async_trait]
impl MailService for MailServiceImpl {
    async fn notify(&self, command: NotifyCommand) -> NotifyResult<EmailNotification> {
        let mut notification =
            self.notification_repo.insert(&NewNotification::from(&command)).await?;
        self.notification_repo.save_changed().await?;

        if !self.templates.has_template(&command.template) {
            return Err(self
                .fail(
                    notification.id,
                    NotifyException::TemplateNotFound {
                        name: command.template,
                    },
                )
                .await);
        }

        let body_html = match self.templates.render(&command.template, &command.context) {
            Ok(body) => body,
            Err(e) => {
                return Err(self
                    .fail(
                        notification.id,
                        NotifyException::Render {
                            name: command.template,
                            reason: e.to_string(),
                        },
                    )
                    .await);
            }
        };

        let mail = RenderedMail {
            from: self.from.clone(),
            to: command.recipient,
            subject: command.subject,
            body_html,
        };
        if let Err(e) = self.sender.send(&mail).await {
            return Err(self
                .fail(
                    notification.id,
                    NotifyException::Transport {
                        reason: e.to_string(),
                    },
                )
                .await);
        }

        let sent_at = Utc::now();
        self.notification_repo.mark_sent(notification.id, sent_at).await?;
        self.notification_repo.save_changed().await?;
        notification.status = DeliveryStatus::Sent;
        notification.sent_at = Some(sent_at);
        Ok(notification)
    }

    async fn get(&self, id: i64) -> NotifyResult<EmailNotification> {
        self.notification_repo
            .find_by_id(id)
            .await?
            .ok_or(NotifyException::NotificationNotFound { id })
    }
}

/// Transport stand-in used until a deployment wires a real relay; logs
/// the outbound mail instead of sending it.
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, mail: &RenderedMail) -> anyhow::Result<()> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "outbound mail (log transport)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::template_registry;
    use domain_notify::mock::{MockMailSender, MockNotificationRepo};
    use serde_json::json;

    fn stored(id: i64, template: &str) -> EmailNotification {
        EmailNotification {
            id,
            recipient: "qa@charlottechemical.com".into(),
            subject: "Feedback requested".into(),
            template: template.into(),
            context: json!({ "message": "hello" }),
            status: DeliveryStatus::Pending,
            error: None,
            created_at: Utc::now(),
            sent_at: None,
        }
    }

    fn command(template: &str) -> NotifyCommand {
        NotifyCommand {
            recipient: "qa@charlottechemical.com".into(),
            subject: "Feedback requested".into(),
            template: template.into(),
            context: json!({ "message": "hello" }),
        }
    }

    fn service(repo: MockNotificationRepo, sender: MockMailSender) -> MailServiceImpl {
        MailServiceImpl::builder()
            .notification_repo(Arc::new(repo))
            .templates(Arc::new(template_registry().unwrap()))
            .sender(Arc::new(sender))
            .build()
    }

    #[tokio::test]
    async fn successful_dispatch_marks_the_row_sent() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_insert().once().returning(|n| Ok(stored(5, &n.template)));
        repo.expect_mark_sent().once().returning(|_, _| Ok(()));
        repo.expect_save_changed().times(2).returning(|| Ok(true));
        let mut sender = MockMailSender::new();
        sender
            .expect_send()
            .withf(|mail| mail.body_html.contains("hello"))
            .once()
            .returning(|_| Ok(()));

        let notification = service(repo, sender).notify(command("generic")).await.unwrap();
        assert_eq!(notification.status, DeliveryStatus::Sent);
        assert!(notification.sent_at.is_some());
    }

    #[tokio::test]
    async fn unknown_template_marks_the_row_failed() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_insert().once().returning(|n| Ok(stored(5, &n.template)));
        repo.expect_mark_failed().once().returning(|_, _| Ok(()));
        repo.expect_save_changed().times(2).returning(|| Ok(true));
        let mut sender = MockMailSender::new();
        sender.expect_send().never();

        let result = service(repo, sender).notify(command("no-such-template")).await;
        assert!(matches!(result, Err(NotifyException::TemplateNotFound { .. })));
    }

    #[tokio::test]
    async fn transport_rejection_marks_the_row_failed() {
        let mut repo = MockNotificationRepo::new();
        repo.expect_insert().once().returning(|n| Ok(stored(5, &n.template)));
        repo.expect_mark_failed()
            .withf(|_, error| error.contains("mailbox unavailable"))
            .once()
            .returning(|_, _| Ok(()));
        repo.expect_save_changed().times(2).returning(|| Ok(true));
        let mut sender = MockMailSender::new();
        sender
            .expect_send()
            .once()
            .returning(|_| Err(anyhow::anyhow!("mailbox unavailable")));

        let result = service(repo, sender).notify(command("generic")).await;
        assert!(matches!(result, Err(NotifyException::Transport { .. })));
    }
}
