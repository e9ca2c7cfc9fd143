use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::CentroTreinamento;

/// Request payload for creating a new centro de treinamento
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCentroTreinamentoRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "nome must be between 1 and 20 characters"
    ))]
    pub nome: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "endereco must be between 1 and 60 characters"
    ))]
    pub endereco: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "proprietario must be between 1 and 30 characters"
    ))]
    pub proprietario: String,
}

/// Response containing a stored centro de treinamento
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CentroTreinamentoResponse {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}

impl From<CentroTreinamento> for CentroTreinamentoResponse {
    fn from(centro: CentroTreinamento) -> Self {
        Self {
            id: centro.id,
            nome: centro.nome,
            endereco: centro.endereco,
            proprietario: centro.proprietario,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCentroTreinamentoRequest {
        CreateCentroTreinamentoRequest {
            nome: "CT King".to_string(),
            endereco: "Rua X, Q02".to_string(),
            proprietario: "Marcos".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_field_length_bounds() {
        let mut req = valid_request();
        req.nome = "a".repeat(21);
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.endereco = "a".repeat(61);
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.proprietario = String::new();
        assert!(req.validate().is_err());
    }
}
