use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::centro_treinamento::{CentroTreinamentoResponse, CreateCentroTreinamentoRequest};
use crate::repository::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CentroTreinamento {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

impl Entity for CentroTreinamento {
    const TABLE: &'static str = "centros_treinamento";
    const RESOURCE: &'static str = "Centro de treinamento";
    const COLUMNS: &'static str = "id, nome, endereco, proprietario";

    type Create = CreateCentroTreinamentoRequest;
    type Output = CentroTreinamentoResponse;

    async fn insert(pool: &PgPool, id: Uuid, req: &Self::Create) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO centros_treinamento (id, nome, endereco, proprietario) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, nome, endereco, proprietario",
        )
        .bind(id)
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(&req.proprietario)
        .fetch_one(pool)
        .await
    }
}
