use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Categoria;

/// Request payload for creating a new categoria
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoriaRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "nome must be between 1 and 10 characters"
    ))]
    pub nome: String,
}

/// Response containing a stored categoria
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriaResponse {
    pub id: Uuid,
    pub nome: String,
}

impl From<Categoria> for CategoriaResponse {
    fn from(categoria: Categoria) -> Self {
        Self {
            id: categoria.id,
            nome: categoria.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nome_length_bounds() {
        let req = CreateCategoriaRequest {
            nome: "Cardio".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = CreateCategoriaRequest {
            nome: String::new(),
        };
        assert!(req.validate().is_err());

        let req = CreateCategoriaRequest {
            nome: "a".repeat(11),
        };
        assert!(req.validate().is_err());
    }
}
