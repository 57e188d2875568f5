use chrono::Utc;
use domain_support::command::NewReport;
use domain_support::model::entity::{NonConformityReport, ReportSeverity, ReportStatus};
use num_traits::FromPrimitive;
use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "non_conformity_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub department_id: Option<i64>,
    pub severity: i32,
    pub status: i32,
    pub reporter: Option<String>,
    pub drive_folder: Option<String>,
    pub created_at: DateTimeUtc,
    pub closed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for NonConformityReport {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            title: m.title,
            description: m.description,
            department_id: m.department_id,
            severity: ReportSeverity::from_i32(m.severity)
                .ok_or(anyhow::anyhow!("unknown report severity: {}", m.severity))?,
            status: ReportStatus::from_i32(m.status)
                .ok_or(anyhow::anyhow!("unknown report status: {}", m.status))?,
            reporter: m.reporter,
            drive_folder: m.drive_folder,
            created_at: m.created_at,
            closed_at: m.closed_at,
        })
    }
}

impl From<&NewReport> for ActiveModel {
    fn from(r: &NewReport) -> Self {
        Self {
            id: Default::default(),
            title: Set(r.title.clone()),
            description: Set(r.description.clone()),
            department_id: Set(r.department_id),
            severity: Set(r.severity as i32),
            status: Set(ReportStatus::Open as i32),
            reporter: Set(r.reporter.clone()),
            drive_folder: Set(None),
            created_at: Set(Utc::now()),
            closed_at: Set(None),
        }
    }
}

impl From<&NonConformityReport> for ActiveModel {
    fn from(r: &NonConformityReport) -> Self {
        Self {
            id: Set(r.id),
            title: Set(r.title.clone()),
            description: Set(r.description.clone()),
            department_id: Set(r.department_id),
            severity: Set(r.severity as i32),
            status: Set(r.status as i32),
            reporter: Set(r.reporter.clone()),
            drive_folder: Set(r.drive_folder.clone()),
            created_at: Set(r.created_at),
            closed_at: Set(r.closed_at),
        }
    }
}
