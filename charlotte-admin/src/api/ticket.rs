use actix_web::{get, post, web, web::Path};
use domain_support::model::entity::{Ticket, TicketHistoryEntry};

use super::dtos::CreateTicketRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/tickets")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    payload: web::Json<CreateTicketRequest>,
) -> ApiResult<web::Json<Ticket>> {
    let ticket = payload.into_inner().validate(Some(user.0))?;
    Ok(web::Json(sp.ticket_service().create(ticket).await?))
}

#[get("/tickets")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Ticket>>> {
    Ok(web::Json(sp.ticket_service().list().await?))
}

#[get("/tickets/{id}")]
pub async fn get(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<Ticket>> {
    Ok(web::Json(sp.ticket_service().get(*id).await?))
}

#[get("/tickets/{id}/history")]
pub async fn history(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<Vec<TicketHistoryEntry>>> {
    Ok(web::Json(sp.ticket_service().history(*id).await?))
}
