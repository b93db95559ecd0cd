//! Custom error types for the monitor

use alloy::primitives::Address;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Address book entry missing: {section}.{key}")]
    MissingAddress {
        section: &'static str,
        key: String,
    },

    #[error("Failed to load address book from {}", path.display())]
    AddressBook {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Insufficient liquidity: {pool} - {details}")]
    InsufficientLiquidity {
        pool: String,
        details: String,
    },
}

impl BotError {
    pub(crate) fn contract(contract: Address, message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        BotError::Contract {
            contract,
            message: message.into(),
            source: source.into(),
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
