pub mod categoria;
pub mod centro_treinamento;

pub use categoria::Categoria;
pub use centro_treinamento::CentroTreinamento;
