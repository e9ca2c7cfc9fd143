use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_categoria, get_categoria, list_categorias};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_categoria))
        .route("/", get(list_categorias))
        .route("/:id", get(get_categoria))
}
