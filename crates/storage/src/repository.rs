use std::future::Future;
use std::marker::PhantomData;

use sqlx::PgPool;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::dto::common::LimitOffsetParams;
use crate::error::{Result, StorageError};

/// A stored resource kind served by the shared CRUD engine.
///
/// Each resource declares its table, the name used in error messages, the
/// selected column list, its create payload, its output representation, and
/// how a new row is inserted. Everything else (create, list with nome filter
/// and pagination, lookup by id) is shared across resources.
pub trait Entity: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin + Sized {
    const TABLE: &'static str;
    const RESOURCE: &'static str;
    const COLUMNS: &'static str;

    type Create: Send + Sync;
    type Output: From<Self>;

    /// Insert a row under the given id and return the stored record.
    fn insert(
        pool: &PgPool,
        id: Uuid,
        req: &Self::Create,
    ) -> impl Future<Output = std::result::Result<Self, sqlx::Error>> + Send;
}

/// Repository for database operations over any [`Entity`].
pub struct Repository<'a, E: Entity> {
    pool: &'a PgPool,
    _entity: PhantomData<E>,
}

impl<'a, E: Entity> Repository<'a, E> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Insert a new record under a freshly generated id.
    pub async fn create(&self, req: &E::Create) -> Result<E> {
        let id = Uuid::new_v4();

        let record = E::insert(self.pool, id, req)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.code().as_deref() == Some("23505") {
                        return StorageError::ConstraintViolation(format!(
                            "{} already exists",
                            E::RESOURCE
                        ));
                    }
                }
                StorageError::from(e)
            })?;

        Ok(record)
    }

    /// List records in insertion order, optionally restricted to those whose
    /// nome contains `nome` case-insensitively, returning the requested slice
    /// and the total match count.
    pub async fn list(
        &self,
        nome: Option<&str>,
        params: &LimitOffsetParams,
    ) -> Result<(Vec<E>, i64)> {
        // An empty filter matches everything, same as no filter.
        match nome.filter(|n| !n.is_empty()) {
            Some(nome) => {
                let pattern = format!("%{nome}%");

                let count_sql =
                    format!("SELECT COUNT(*) FROM {} WHERE nome ILIKE $1", E::TABLE);
                let total: i64 = sqlx::query_scalar(&count_sql)
                    .bind(&pattern)
                    .fetch_one(self.pool)
                    .await?;

                let page_sql = format!(
                    "SELECT {} FROM {} WHERE nome ILIKE $1 ORDER BY pk_id LIMIT $2 OFFSET $3",
                    E::COLUMNS,
                    E::TABLE
                );
                let items = sqlx::query_as::<_, E>(&page_sql)
                    .bind(&pattern)
                    .bind(params.limit as i64)
                    .bind(params.offset as i64)
                    .fetch_all(self.pool)
                    .await?;

                Ok((items, total))
            }
            None => {
                let count_sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
                let total: i64 = sqlx::query_scalar(&count_sql).fetch_one(self.pool).await?;

                let page_sql = format!(
                    "SELECT {} FROM {} ORDER BY pk_id LIMIT $1 OFFSET $2",
                    E::COLUMNS,
                    E::TABLE
                );
                let items = sqlx::query_as::<_, E>(&page_sql)
                    .bind(params.limit as i64)
                    .bind(params.offset as i64)
                    .fetch_all(self.pool)
                    .await?;

                Ok((items, total))
            }
        }
    }

    /// Find a record by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<E> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound {
                resource: E::RESOURCE,
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Categoria, CentroTreinamento};

    use super::*;

    #[test]
    fn test_entity_metadata() {
        assert_eq!(Categoria::TABLE, "categorias");
        assert_eq!(Categoria::RESOURCE, "Categoria");
        assert_eq!(CentroTreinamento::TABLE, "centros_treinamento");
        assert_eq!(CentroTreinamento::RESOURCE, "Centro de treinamento");
    }

    #[test]
    fn test_entity_columns_include_id() {
        assert!(Categoria::COLUMNS.starts_with("id"));
        assert!(CentroTreinamento::COLUMNS.starts_with("id"));
    }
}
