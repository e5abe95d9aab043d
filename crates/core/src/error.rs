use thiserror::Error;

use crate::model::{ContinentParseError, CountryCodeError, DifficultyParseError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    CountryCode(#[from] CountryCodeError),
    #[error(transparent)]
    Continent(#[from] ContinentParseError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyParseError),
    #[error(transparent)]
    FlagUrl(#[from] url::ParseError),
}
