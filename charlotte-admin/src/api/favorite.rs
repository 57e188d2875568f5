use actix_web::{delete, get, post, web, web::Path, HttpResponse};
use domain_content::model::entity::Favorite;

use super::dtos::CreateFavoriteRequest;
use super::{ApiResult, AuthenticatedUser};
use crate::infrastructure::service_provider::ServiceProvider;

#[post("/favorites")]
pub async fn add(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    payload: web::Json<CreateFavoriteRequest>,
) -> ApiResult<web::Json<Favorite>> {
    let favorite = payload.into_inner().validate(user.0)?;
    Ok(web::Json(sp.favorite_service().add(favorite).await?))
}

#[get("/favorites")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Favorite>>> {
    Ok(web::Json(sp.favorite_service().list_for_user(&user.0).await?))
}

#[delete("/favorites/{id}")]
pub async fn remove(
    sp: web::Data<ServiceProvider>,
    user: AuthenticatedUser,
    id: Path<i64>,
) -> ApiResult<HttpResponse> {
    sp.favorite_service().remove(*id, &user.0).await?;
    Ok(HttpResponse::NoContent().finish())
}
