use actix_web::{get, post, web, web::Path};
use domain_support::model::entity::Feedback;
use serde::Serialize;

use super::dtos::SubmitFeedbackRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackExistsDto {
    pub ticket_id: String,
    pub exists: bool,
}

#[post("/ticket-feedback")]
pub async fn submit(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    payload: web::Json<SubmitFeedbackRequest>,
) -> ApiResult<web::Json<Feedback>> {
    let submission = payload.into_inner().validate(Some(user.0))?;
    let feedback = sp.feedback_service().submit(submission).await?;
    Ok(web::Json(feedback))
}

#[get("/ticket-feedback/{ticket_id}")]
pub async fn exists(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    ticket_id: Path<String>,
) -> ApiResult<web::Json<FeedbackExistsDto>> {
    let ticket_id = ticket_id.into_inner();
    let exists = sp.feedback_service().exists_for_ticket(&ticket_id).await?;
    Ok(web::Json(FeedbackExistsDto { ticket_id, exists }))
}

#[get("/ticket-feedback/{ticket_id}/entries")]
pub async fn entries(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    ticket_id: Path<String>,
) -> ApiResult<web::Json<Vec<Feedback>>> {
    let entries = sp.feedback_service().find_by_ticket(&ticket_id).await?;
    Ok(web::Json(entries))
}
