use actix_web::{get, post, web, web::Path};
use domain_notify::model::entity::EmailNotification;

use super::dtos::NotifyRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/notifications")]
pub async fn send(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    payload: web::Json<NotifyRequest>,
) -> ApiResult<web::Json<EmailNotification>> {
    let command = payload.into_inner().validate()?;
    Ok(web::Json(sp.mail_service().notify(command).await?))
}

#[get("/notifications/{id}")]
pub async fn get(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<EmailNotification>> {
    Ok(web::Json(sp.mail_service().get(*id).await?))
}
