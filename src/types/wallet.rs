/*!
   Types for test user wallets.
*/

use core::fmt::{self, Display};

/**
   Newtype for the key name a wallet is registered under in the chain's
   keyring.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletId(pub String);

/**
   Newtype for a bech32-formatted wallet address.
*/
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WalletAddress(pub String);

/**
   A test user on one chain. Wallets are created and funded through
   [`get_and_fund_test_users`](crate::bootstrap::fund::get_and_fund_test_users)
   and are not reused across chains.
*/
#[derive(Debug, Clone)]
pub struct Wallet {
    /// The key name in the chain keyring.
    pub id: WalletId,

    /// The formatted address of the wallet on its chain.
    pub address: WalletAddress,
}

impl Wallet {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: WalletId(id.into()),
            address: WalletAddress(address.into()),
        }
    }
}

impl WalletAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
