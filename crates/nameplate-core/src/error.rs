use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("name {0:?} leaves no characters for an email address")]
    EmptyEmailLocalPart(String),
    #[error("invalid name particle: {0:?}")]
    InvalidParticle(String),
    #[error("invalid email domain: {0:?}")]
    InvalidEmailDomain(String),
}
