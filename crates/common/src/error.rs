use thiserror::Error;

// Display texts end up in the chat as part of the failure notification,
// so they are written for the user rather than for the log.

/// Failures of a single request to the homework API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Ошибка получения ответа API: {0}")]
    Transport(String),

    #[error("HTTPStatus: {0}")]
    BadStatus(u16),

    #[error("Неудачная попытка преобразования ответа API из JSON, ошибка: {0}")]
    Decode(String),
}

/// Shape errors in a decoded API response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Ответ API не является словарем")]
    NotAMapping,

    #[error("Ключ \"{0}\" в ответе API не найден")]
    MissingKey(&'static str),

    #[error("Ключ \"{0}\" в ответе API не является списком")]
    WrongType(&'static str),
}

/// Errors turning a homework record into a notification text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Ключа \"{0}\" нет в выбранной домашней работе")]
    MissingField(&'static str),

    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownStatus(String),
}

/// Delivery failure from a notifier. Opaque to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ошибка отправки сообщения: {0}")]
pub struct SendError(pub String);

/// Any error that aborts one polling cycle before a status message is composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
