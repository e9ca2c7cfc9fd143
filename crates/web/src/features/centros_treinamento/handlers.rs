use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::centro_treinamento::{CentroTreinamentoResponse, CreateCentroTreinamentoRequest},
    dto::common::{LimitOffsetParams, Page},
    models::CentroTreinamento,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::resource::{self, NomeFilter};

#[utoipa::path(
    post,
    path = "/api/centros_treinamento",
    request_body = CreateCentroTreinamentoRequest,
    responses(
        (status = 201, description = "Centro de treinamento created successfully", body = CentroTreinamentoResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Centro de treinamento already exists")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_centro_treinamento(
    State(db): State<Database>,
    Json(req): Json<CreateCentroTreinamentoRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let centro = resource::create::<CentroTreinamento>(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(centro)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/centros_treinamento",
    params(NomeFilter, LimitOffsetParams),
    responses(
        (status = 200, description = "Paginated centros de treinamento", body = Page<CentroTreinamentoResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "centros_treinamento"
)]
pub async fn list_centros_treinamento(
    State(db): State<Database>,
    Query(filter): Query<NomeFilter>,
    Query(params): Query<LimitOffsetParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let page = resource::list::<CentroTreinamento>(db.pool(), &filter, &params).await?;

    Ok(Json(page).into_response())
}

#[utoipa::path(
    get,
    path = "/api/centros_treinamento/{id}",
    params(
        ("id" = Uuid, Path, description = "Centro de treinamento id")
    ),
    responses(
        (status = 200, description = "Centro de treinamento found", body = CentroTreinamentoResponse),
        (status = 404, description = "Centro de treinamento not found")
    ),
    tag = "centros_treinamento"
)]
pub async fn get_centro_treinamento(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let centro = resource::get_by_id::<CentroTreinamento>(db.pool(), id).await?;

    Ok(Json(centro).into_response())
}
