use actix_web::{get, post, web, web::Path};
use domain_support::model::entity::NonConformityReport;

use super::dtos::CreateReportRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/reports")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    payload: web::Json<CreateReportRequest>,
) -> ApiResult<web::Json<NonConformityReport>> {
    let report = payload.into_inner().validate(Some(user.0))?;
    Ok(web::Json(sp.report_service().create(report).await?))
}

#[get("/reports")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<NonConformityReport>>> {
    Ok(web::Json(sp.report_service().list().await?))
}

#[get("/reports/{id}")]
pub async fn get(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<NonConformityReport>> {
    Ok(web::Json(sp.report_service().get(*id).await?))
}

#[post("/reports/{id}/close")]
pub async fn close(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<NonConformityReport>> {
    Ok(web::Json(sp.report_service().close(*id, &user.0).await?))
}
