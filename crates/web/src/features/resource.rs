//! Shared create/list/get flow over any stored resource.
//!
//! Categorias and centros de treinamento expose the same operation shape, so
//! the request-handling logic lives here once, parameterized over the
//! storage-side [`Entity`]. The per-resource modules only wire concrete
//! extractor types, routes, and OpenAPI docs onto these functions.

use serde::Deserialize;
use sqlx::PgPool;
use storage::{
    dto::common::{LimitOffsetParams, Page},
    error::Result,
    repository::{Entity, Repository},
};
use utoipa::IntoParams;
use uuid::Uuid;

/// Optional case-insensitive substring filter on nome.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NomeFilter {
    pub nome: Option<String>,
}

/// Create a new record with a server-assigned id.
pub async fn create<E: Entity>(pool: &PgPool, req: &E::Create) -> Result<E::Output> {
    let repo = Repository::<E>::new(pool);
    let record = repo.create(req).await?;

    Ok(E::Output::from(record))
}

/// List records, filtered and paginated, wrapped in a page envelope.
pub async fn list<E: Entity>(
    pool: &PgPool,
    filter: &NomeFilter,
    params: &LimitOffsetParams,
) -> Result<Page<E::Output>> {
    let repo = Repository::<E>::new(pool);
    let (records, total) = repo.list(filter.nome.as_deref(), params).await?;

    let items = records.into_iter().map(E::Output::from).collect();

    Ok(Page::new(items, total, params))
}

/// Get a single record by id.
pub async fn get_by_id<E: Entity>(pool: &PgPool, id: Uuid) -> Result<E::Output> {
    let repo = Repository::<E>::new(pool);
    let record = repo.find_by_id(id).await?;

    Ok(E::Output::from(record))
}
