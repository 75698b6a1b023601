/*!
   A token is an amount in some denomination.
*/

use core::fmt::{self, Display};

use crate::ibc::denom::Denom;

/**
   An amount of tokens in a given denomination.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub denom: Denom,
    pub amount: u128,
}

impl Token {
    pub fn new(denom: Denom, amount: u128) -> Self {
        Self { denom, amount }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
