//! Value-token adapter. All escrow custody moves through these two calls.

use soroban_sdk::{token, Address, Env};

use crate::storage_types::{DataKey, Error};

pub fn token_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

/// Pull a contribution from the contributor into contract custody.
///
/// Uses the token's delegated transfer with the contract as spender, so
/// the contributor must have approved at least `amount` beforehand. A
/// rejected pull traps the whole invocation; no ledger state survives it.
pub fn pull(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::TokenClient::new(env, &token_address(env)?);
    let contract = env.current_contract_address();
    client.transfer_from(&contract, from, &contract, &amount);
    Ok(())
}

/// Push escrowed value out of contract custody.
pub fn push(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::TokenClient::new(env, &token_address(env)?);
    client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
