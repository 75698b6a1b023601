/*!
   Creation and funding of test user accounts.
*/

use tracing::info;

use crate::chain::endpoint::ChainEndpoint;
use crate::chain::ext::fund::ChainFundMethodsExt;
use crate::error::Error;
use crate::ibc::token::Token;
use crate::types::wallet::Wallet;

/**
   Create one fresh user wallet per chain and fund each with `amount`
   of that chain's native denomination, blocking until every funding
   transaction has landed. Wallets are returned in chain order and are
   never shared across chains.

   Any funding failure aborts the whole test.
*/
pub fn get_and_fund_test_users<Chain: ChainEndpoint>(
    test_name: &str,
    amount: u128,
    chains: &[&Chain],
) -> Result<Vec<Wallet>, Error> {
    let mut users = Vec::with_capacity(chains.len());

    for (index, chain) in chains.iter().enumerate() {
        let key_name = format!("{}-user-{}", test_name, index + 1);
        let wallet = chain.add_wallet(&key_name)?;

        let token = Token::new(chain.config().native_denom(), amount);
        chain.fund_wallet(&wallet.address, &token)?;
        chain.assert_eventual_wallet_amount(&wallet.address, &token)?;

        info!(
            "funded wallet {} on chain {} with {}",
            wallet.address,
            chain.chain_id(),
            token
        );

        users.push(wallet);
    }

    Ok(users)
}
