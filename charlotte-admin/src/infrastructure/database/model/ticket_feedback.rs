use chrono::Utc;
use domain_support::command::NewFeedback;
use domain_support::model::entity::Feedback;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Textual identifier as submitted; not a foreign key on purpose.
    pub ticket_id: String,
    pub knowledge: i32,
    pub timing: i32,
    pub escalation: i32,
    pub resolved: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Feedback {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            ticket_id: m.ticket_id,
            knowledge: m.knowledge,
            timing: m.timing,
            escalation: m.escalation,
            resolved: m.resolved,
            comment: m.comment,
            created_at: m.created_at,
        }
    }
}

impl From<&NewFeedback> for ActiveModel {
    fn from(f: &NewFeedback) -> Self {
        Self {
            id: Default::default(),
            ticket_id: Set(f.ticket_id.clone()),
            knowledge: Set(f.knowledge),
            timing: Set(f.timing),
            escalation: Set(f.escalation),
            resolved: Set(f.resolved),
            comment: Set(f.comment.clone()),
            created_at: Set(Utc::now()),
        }
    }
}
