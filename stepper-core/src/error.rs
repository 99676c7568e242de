use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum DriveError {
    #[error("failed to drive a coil output")]
    Coil,
    #[error("failed to sample a button input")]
    Button,
}
