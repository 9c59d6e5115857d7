use anyhow::Error;
use nameplate_config::ConfigError;
use nameplate_core::CoreError;
use nameplate_store::error::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid person id: {0:?}")]
    InvalidPersonId(String),
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

/// Exit status for the first cause in the chain that carries one.
fn exit_status(err: &Error) -> u8 {
    err.chain()
        .find_map(|cause| {
            if cause.is::<CliError>() || cause.is::<CoreError>() {
                Some(EXIT_INVALID_INPUT)
            } else if let Some(store_err) = cause.downcast_ref::<StoreError>() {
                Some(store_exit_code(store_err))
            } else {
                cause.downcast_ref::<ConfigError>().map(config_exit_code)
            }
        })
        .unwrap_or(EXIT_FAILURE)
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::NotFound => EXIT_NOT_FOUND,
        StoreErrorKind::Conflict | StoreErrorKind::InvalidInput => EXIT_INVALID_INPUT,
        StoreErrorKind::Internal => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        _ => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status, CliError, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_NOT_FOUND};
    use anyhow::{anyhow, Context};
    use nameplate_core::{CoreError, PersonId};
    use nameplate_store::error::StoreError;

    #[test]
    fn exit_code_follows_first_known_cause() {
        let duplicate = anyhow::Error::from(StoreError::DuplicateEmail("a@b.c".to_string()))
            .context("create person");
        assert_eq!(exit_status(&duplicate), EXIT_INVALID_INPUT);

        let missing: anyhow::Result<()> =
            Err(StoreError::PersonNotFound(PersonId(9))).context("show person");
        assert_eq!(exit_status(&missing.unwrap_err()), EXIT_NOT_FOUND);

        let blank = anyhow::Error::from(CoreError::EmptyName);
        assert_eq!(exit_status(&blank), EXIT_INVALID_INPUT);

        let bad_id = anyhow::Error::from(CliError::InvalidPersonId("x".to_string()));
        assert_eq!(exit_status(&bad_id), EXIT_INVALID_INPUT);

        assert_eq!(exit_status(&anyhow!("boom")), EXIT_FAILURE);
    }
}
