//! Address book: logical pool/token names to on-chain addresses

use alloy::primitives::Address;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use crate::{
    errors::{BotError, BotResult},
    types::{Dex, PoolKind},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    pub tokens: BTreeMap<String, String>,
    pub pala_pools: BTreeMap<String, String>,
    pub klayswap_pools: BTreeMap<String, String>,
    #[serde(default)]
    pub pala_contracts: BTreeMap<String, String>,
}

impl AddressBook {
    pub fn load(path: impl AsRef<Path>) -> BotResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| BotError::AddressBook {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let book = Self::from_yaml(&raw).map_err(|e| BotError::AddressBook {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!(
            "Loaded address book from {} ({} tokens, {} PalaDEX pools, {} Klayswap pools)",
            path.display(),
            book.tokens.len(),
            book.pala_pools.len(),
            book.klayswap_pools.len()
        );
        Ok(book)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    pub fn token(&self, name: &str) -> BotResult<Address> {
        lookup(&self.tokens, "tokens", name)
    }

    pub fn pool(&self, dex: Dex, pool: PoolKind) -> BotResult<Address> {
        match dex {
            Dex::PalaDex => lookup(&self.pala_pools, "palaPools", pool.key()),
            Dex::Klayswap => lookup(&self.klayswap_pools, "klayswapPools", pool.key()),
        }
    }

    pub fn pala_viewer(&self) -> BotResult<Address> {
        lookup(&self.pala_contracts, "palaContracts", "palaViewer")
    }

    pub fn kusdt(&self) -> BotResult<Address> {
        self.token("kusdt")
    }
}

fn lookup(
    section: &BTreeMap<String, String>,
    section_name: &'static str,
    key: &str,
) -> BotResult<Address> {
    let raw = section.get(key).ok_or_else(|| BotError::MissingAddress {
        section: section_name,
        key: key.to_string(),
    })?;

    Address::from_str(raw.trim()).map_err(|e| BotError::DataParsing {
        context: format!("{}.{} is not an address: {}", section_name, key, raw),
        source: e.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const BOOK: &str = r#"
tokens:
  pala: "0x7A1CdCA99FE5995ab8E317eDE8495c07Cbf488aD"
  kusdt: "0xcee8faf64bb97a73bb51e115aa89c17ffa8dd167"
  wklay: "0x2ff5f6dE2287CA3075232127277E53519A77947C"
palaPools:
  pala-kusdt: "0x2caA83Af6bBF61Dc15e7BCC5952bbb554358AD11"
  pala-klay: "0xc556be31D170cA00241231371E139C8e4c0fc204"
  klay-kusdt: "0xAb47eDf354348e14cFcc1949b38BF2317d510B79"
klayswapPools:
  klay-kusdt: "not-an-address"
"#;

    #[test]
    fn resolves_tokens_and_pools() {
        let book = AddressBook::from_yaml(BOOK).unwrap();
        assert_eq!(book.kusdt().unwrap(), address!("cee8faf64bb97a73bb51e115aa89c17ffa8dd167"));
        assert_eq!(
            book.pool(Dex::PalaDex, PoolKind::PalaKlay).unwrap(),
            address!("c556be31D170cA00241231371E139C8e4c0fc204")
        );
    }

    #[test]
    fn missing_entries_are_reported() {
        let book = AddressBook::from_yaml(BOOK).unwrap();
        match book.pala_viewer() {
            Err(BotError::MissingAddress { section, key }) => {
                assert_eq!(section, "palaContracts");
                assert_eq!(key, "palaViewer");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            book.pool(Dex::Klayswap, PoolKind::PalaKusdt),
            Err(BotError::MissingAddress { section: "klayswapPools", .. })
        ));
    }

    #[test]
    fn malformed_address_is_a_parse_error() {
        let book = AddressBook::from_yaml(BOOK).unwrap();
        assert!(matches!(
            book.pool(Dex::Klayswap, PoolKind::KlayKusdt),
            Err(BotError::DataParsing { .. })
        ));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = AddressBook::load("/nonexistent/addrBook.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/addrBook.yaml"));
    }
}
