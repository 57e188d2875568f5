use actix_web::{delete, get, post, put, web, web::Path, HttpResponse};
use domain_content::model::{entity::Department, vo::DepartmentNode};

use super::dtos::DepartmentRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/departments")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<Department>> {
    let department = payload.into_inner().validate_new()?;
    Ok(web::Json(sp.department_service().create(department).await?))
}

#[put("/departments/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<Department>> {
    let department = payload.into_inner().validate_update()?;
    Ok(web::Json(sp.department_service().update(*id, department).await?))
}

#[delete("/departments/{id}")]
pub async fn delete(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<HttpResponse> {
    sp.department_service().delete(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/departments")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Department>>> {
    Ok(web::Json(sp.department_service().list().await?))
}

#[get("/departments/tree")]
pub async fn tree(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<DepartmentNode>>> {
    Ok(web::Json(sp.department_service().tree().await?))
}

#[get("/departments/{id}")]
pub async fn get(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<web::Json<Department>> {
    Ok(web::Json(sp.department_service().get(*id).await?))
}
