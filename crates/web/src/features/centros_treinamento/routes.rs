use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_centro_treinamento, get_centro_treinamento, list_centros_treinamento};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_centro_treinamento))
        .route("/", get(list_centros_treinamento))
        .route("/:id", get(get_centro_treinamento))
}
