use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Turns a missing single-record lookup into [`CoreError::NotFound`].
///
/// Every "expected exactly one row" fetch goes through this so that an
/// absent record is reported the same way by every endpoint.
pub trait OptionExt<T> {
    fn or_not_found(self, entity: &'static str, id: DbId) -> Result<T, CoreError>;
}

impl<T> OptionExt<T> for Option<T> {
    fn or_not_found(self, entity: &'static str, id: DbId) -> Result<T, CoreError> {
        self.ok_or(CoreError::NotFound { entity, id })
    }
}
