use chrono::Utc;
use domain_support::command::NewTicket;
use domain_support::model::entity::{Ticket, TicketStatus};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: i32,
    pub requester: Option<String>,
    pub assignee: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Ticket {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            subject: m.subject,
            description: m.description,
            status: TicketStatus::from_i32(m.status)
                .ok_or(anyhow::anyhow!("unknown ticket status: {}", m.status))?,
            requester: m.requester,
            assignee: m.assignee,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

impl From<&NewTicket> for ActiveModel {
    fn from(t: &NewTicket) -> Self {
        let now = Utc::now();
        Self {
            id: Default::default(),
            subject: Set(t.subject.clone()),
            description: Set(t.description.clone()),
            status: Set(TicketStatus::Open as i32),
            requester: Set(t.requester.clone()),
            assignee: Set(t.assignee.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Full-row update; `updated_at` is refreshed here.
impl From<&Ticket> for ActiveModel {
    fn from(t: &Ticket) -> Self {
        Self {
            id: Set(t.id),
            subject: Set(t.subject.clone()),
            description: Set(t.description.clone()),
            status: Set(t.status as i32),
            requester: Set(t.requester.clone()),
            assignee: Set(t.assignee.clone()),
            created_at: Set(t.created_at),
            updated_at: Set(Utc::now()),
        }
    }
}
