mod banner;
mod department;
mod favorite;
mod non_conformity_report;
mod notification;
mod ticket;
mod ticket_feedback;
mod ticket_history;

pub mod prelude {
    pub use super::{
        banner::{
            ActiveModel as BannerActiveModel, Column as BannerColumn, Entity as BannerEntity,
            Model as BannerModel,
        },
        department::{
            ActiveModel as DepartmentActiveModel, Column as DepartmentColumn,
            Entity as DepartmentEntity, Model as DepartmentModel,
        },
        favorite::{
            ActiveModel as FavoriteActiveModel, Column as FavoriteColumn,
            Entity as FavoriteEntity, Model as FavoriteModel,
        },
        non_conformity_report::{
            ActiveModel as ReportActiveModel, Column as ReportColumn, Entity as ReportEntity,
            Model as ReportModel,
        },
        notification::{
            ActiveModel as NotificationActiveModel, Column as NotificationColumn,
            Entity as NotificationEntity, Model as NotificationModel,
        },
        ticket::{
            ActiveModel as TicketActiveModel, Column as TicketColumn, Entity as TicketEntity,
            Model as TicketModel,
        },
        ticket_feedback::{
            ActiveModel as FeedbackActiveModel, Column as FeedbackColumn,
            Entity as FeedbackEntity, Model as FeedbackModel,
        },
        ticket_history::{
            ActiveModel as TicketHistoryActiveModel, Column as TicketHistoryColumn,
            Entity as TicketHistoryEntity, Model as TicketHistoryModel,
        },
    };
}
