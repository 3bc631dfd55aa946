use thiserror::Error;

use crate::{
    client::ClientError, domain::RecordError, notifier::NotifyError, response::ShapeError,
};

pub type Result<T> = std::result::Result<T, HwbotError>;

/// Cycle-level failures surfaced by the poll loop.
///
/// None of these terminate the process; the loop logs them and retries
/// after the regular delay.
#[derive(Debug, Error)]
pub enum HwbotError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
