use thiserror::Error;

use crate::session::TransitionError;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("task service error: {0}")]
    Collaborator(#[from] anyhow::Error),
    #[error("session error: {0}")]
    Transition(#[from] TransitionError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("picker failed: {0}")]
    Picker(#[from] PickerError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
