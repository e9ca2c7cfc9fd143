use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::categoria::{CategoriaResponse, CreateCategoriaRequest};
use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Categoria {
    pub id: Uuid,
    pub nome: String,
}

impl Entity for Categoria {
    const TABLE: &'static str = "categorias";
    const RESOURCE: &'static str = "Categoria";
    const COLUMNS: &'static str = "id, nome";

    type Create = CreateCategoriaRequest;
    type Output = CategoriaResponse;

    async fn insert(pool: &PgPool, id: Uuid, req: &Self::Create) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO categorias (id, nome) VALUES ($1, $2) RETURNING id, nome",
        )
        .bind(id)
        .bind(&req.nome)
        .fetch_one(pool)
        .await
    }
}
