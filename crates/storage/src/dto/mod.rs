pub mod categoria;
pub mod centro_treinamento;
pub mod common;
