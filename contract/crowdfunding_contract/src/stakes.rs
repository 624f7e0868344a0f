//! Per-(campaign, contributor) stake ledger. Pure bookkeeping; no time or
//! goal logic lives here.

use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, Error, TTL_PERSISTENT};

/// Add `amount` to a contributor's escrowed stake. Overflow is rejected
/// rather than wrapped.
pub fn increase(
    env: &Env,
    campaign_id: u64,
    contributor: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let key = DataKey::Stake(campaign_id, contributor.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(Error::StakeOverflow)?;

    env.storage().persistent().set(&key, &updated);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);

    Ok(updated)
}

/// Current stake, 0 if the contributor never funded this campaign.
pub fn get(env: &Env, campaign_id: u64, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Stake(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// Zero out a stake and return what it held immediately before. A second
/// call finds nothing and returns 0.
pub fn clear(env: &Env, campaign_id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Stake(campaign_id, contributor.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if current != 0 {
        env.storage().persistent().remove(&key);
    }
    current
}
