use chrono::Utc;
use domain_notify::command::NewNotification;
use domain_notify::model::entity::{DeliveryStatus, EmailNotification};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub template: String,
    pub context: Json,
    pub status: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    pub created_at: DateTimeUtc,
    pub sent_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for EmailNotification {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            recipient: m.recipient,
            subject: m.subject,
            template: m.template,
            context: m.context,
            status: DeliveryStatus::from_i32(m.status)
                .ok_or(anyhow::anyhow!("unknown delivery status: {}", m.status))?,
            error: m.error,
            created_at: m.created_at,
            sent_at: m.sent_at,
        })
    }
}

impl From<&NewNotification> for ActiveModel {
    fn from(n: &NewNotification) -> Self {
        Self {
            id: Default::default(),
            recipient: Set(n.recipient.clone()),
            subject: Set(n.subject.clone()),
            template: Set(n.template.clone()),
            context: Set(n.context.clone()),
            status: Set(DeliveryStatus::Pending as i32),
            error: Set(None),
            created_at: Set(Utc::now()),
            sent_at: Set(None),
        }
    }
}
