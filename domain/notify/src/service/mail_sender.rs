use async_trait::async_trait;

use crate::model::vo::RenderedMail;

/// Outbound mail transport. The real SMTP relay lives outside this
/// system; implementations adapt whatever transport the deployment uses.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: &RenderedMail) -> anyhow::Result<()>;
}
