use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("there is no {entity} with this id")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),
}
