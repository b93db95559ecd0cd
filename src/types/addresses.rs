//! DEX and pool identifiers used to key the address book

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dex {
    PalaDex,
    Klayswap,
}

impl Dex {
    pub fn name(&self) -> &'static str {
        match self {
            Dex::PalaDex => "PalaDEX",
            Dex::Klayswap => "Klayswap",
        }
    }
}

impl fmt::Display for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    KlayKusdt,
    PalaKusdt,
    PalaKlay,
}

impl PoolKind {
    /// Key under which the pool appears in the address book.
    pub fn key(&self) -> &'static str {
        match self {
            PoolKind::KlayKusdt => "klay-kusdt",
            PoolKind::PalaKusdt => "pala-kusdt",
            PoolKind::PalaKlay => "pala-klay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PoolKind::KlayKusdt => "KLAY-KUSDT",
            PoolKind::PalaKusdt => "PALA-KUSDT",
            PoolKind::PalaKlay => "PALA-KLAY",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
