use actix_web::{delete, get, post, put, web, web::Path, HttpResponse};
use domain_content::model::entity::Banner;

use super::dtos::BannerRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/banners")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    payload: web::Json<BannerRequest>,
) -> ApiResult<web::Json<Banner>> {
    let banner = payload.into_inner().validate_new()?;
    Ok(web::Json(sp.banner_service().create(banner).await?))
}

#[put("/banners/{id}")]
pub async fn update(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
    payload: web::Json<BannerRequest>,
) -> ApiResult<web::Json<Banner>> {
    let banner = payload.into_inner().validate_update()?;
    Ok(web::Json(sp.banner_service().update(*id, banner).await?))
}

#[delete("/banners/{id}")]
pub async fn delete(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<HttpResponse> {
    sp.banner_service().delete(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/banners")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Banner>>> {
    Ok(web::Json(sp.banner_service().list().await?))
}

/// Public endpoint; the mobile home screen polls it without a session.
#[get("/banners/active")]
pub async fn active(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<Vec<Banner>>> {
    Ok(web::Json(sp.banner_service().list_active().await?))
}
