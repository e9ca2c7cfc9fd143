use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::categoria::{CategoriaResponse, CreateCategoriaRequest},
    dto::common::{LimitOffsetParams, Page},
    models::Categoria,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::resource::{self, NomeFilter};

#[utoipa::path(
    post,
    path = "/api/categorias",
    request_body = CreateCategoriaRequest,
    responses(
        (status = 201, description = "Categoria created successfully", body = CategoriaResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Categoria already exists")
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(db): State<Database>,
    Json(req): Json<CreateCategoriaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let categoria = resource::create::<Categoria>(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(categoria)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categorias",
    params(NomeFilter, LimitOffsetParams),
    responses(
        (status = 200, description = "Paginated categorias", body = Page<CategoriaResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "categorias"
)]
pub async fn list_categorias(
    State(db): State<Database>,
    Query(filter): Query<NomeFilter>,
    Query(params): Query<LimitOffsetParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let page = resource::list::<Categoria>(db.pool(), &filter, &params).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Categoria id")
    ),
    responses(
        (status = 200, description = "Categoria found", body = CategoriaResponse),
        (status = 404, description = "Categoria not found")
    ),
    tag = "categorias"
)]
pub async fn get_categoria(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let categoria = resource::get_by_id::<Categoria>(db.pool(), id).await?;

    Ok(Json(categoria).into_response())
}
