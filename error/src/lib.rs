// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A required argument is missing or unusable.
  #[error("Validation error: {0}")]
  ValidationError(String),
  /// Builder methods were called in the wrong order.
  #[error("Precondition failed: {0}")]
  PreconditionError(String),
}

impl Error {
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::ValidationError(msg.into())
  }

  pub fn precondition(msg: impl Into<String>) -> Self {
    Self::PreconditionError(msg.into())
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, Self::ValidationError(_))
  }

  pub fn is_precondition(&self) -> bool {
    matches!(self, Self::PreconditionError(_))
  }
}
