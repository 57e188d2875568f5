use chrono::Utc;
use domain_support::model::entity::{HistoryAction, NewHistoryEntry, TicketHistoryEntry};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub ticket_id: i64,
    pub user_id: Option<String>,
    pub action: i32,
    pub old_values: Json,
    pub new_values: Json,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub metadata: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for TicketHistoryEntry {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            ticket_id: m.ticket_id,
            user_id: m.user_id,
            action: HistoryAction::from_i32(m.action)
                .ok_or(anyhow::anyhow!("unknown history action: {}", m.action))?,
            old_values: serde_json::from_value(m.old_values)?,
            new_values: serde_json::from_value(m.new_values)?,
            description: m.description,
            metadata: serde_json::from_value(m.metadata)?,
            created_at: m.created_at,
        })
    }
}

impl From<&NewHistoryEntry> for ActiveModel {
    fn from(e: &NewHistoryEntry) -> Self {
        Self {
            id: Default::default(),
            ticket_id: Set(e.ticket_id),
            user_id: Set(e.user_id.clone()),
            action: Set(e.action as i32),
            old_values: Set(Value::Object(e.old_values.clone())),
            new_values: Set(Value::Object(e.new_values.clone())),
            description: Set(e.description.clone()),
            metadata: Set(Value::Object(e.metadata.clone())),
            created_at: Set(Utc::now()),
        }
    }
}
