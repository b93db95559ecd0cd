//! Token metadata reads

use alloy::primitives::Address;
use crate::{
    contracts::IToken,
    errors::{BotError, BotResult},
    ConcreteProvider,
};

pub async fn get_token_decimals(provider: &ConcreteProvider, token: Address) -> BotResult<u8> {
    let decimals = IToken::new(token, provider)
        .decimals()
        .call()
        .await
        .map_err(|e| BotError::contract(token, "Failed to call decimals", e))?;
    Ok(decimals._0)
}
