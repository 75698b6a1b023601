/*!
   Balance assertions used when funding test wallets.
*/

use core::time::Duration;

use eyre::eyre;

use crate::chain::endpoint::ChainEndpoint;
use crate::error::Error;
use crate::ibc::token::Token;
use crate::types::wallet::WalletAddress;
use crate::util::retry::assert_eventually_succeed;

/**
   Number of attempts to query a wallet until it reaches the target
   amount. Generous enough for slow CI environments; if the retries
   are exhausted regularly it usually points at an underlying
   performance problem rather than a too-small constant.
*/
const WAIT_WALLET_AMOUNT_ATTEMPTS: u16 = 90;

pub trait ChainFundMethodsExt {
    /// Assert that a wallet eventually holds the expected amount in
    /// the given denomination.
    fn assert_eventual_wallet_amount(
        &self,
        wallet: &WalletAddress,
        token: &Token,
    ) -> Result<(), Error>;
}

impl<Chain: ChainEndpoint> ChainFundMethodsExt for Chain {
    fn assert_eventual_wallet_amount(
        &self,
        wallet: &WalletAddress,
        token: &Token,
    ) -> Result<(), Error> {
        assert_eventually_succeed(
            &format!("wallet {} reaches amount {}", wallet, token),
            WAIT_WALLET_AMOUNT_ATTEMPTS,
            Duration::from_millis(500),
            || {
                let amount = self.query_balance(wallet, &token.denom)?;

                if amount == token.amount {
                    Ok(())
                } else {
                    Err(Error::generic(eyre!(
                        "current balance {} of wallet {} does not match the target amount {}",
                        amount,
                        wallet,
                        token
                    )))
                }
            },
        )?;

        Ok(())
    }
}
