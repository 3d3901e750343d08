use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Transcript is empty")]
    Empty,
}
