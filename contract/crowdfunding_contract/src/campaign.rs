use soroban_sdk::Env;

use crate::storage_types::{Campaign, DataKey, Error, TTL_INSTANCE, TTL_PERSISTENT};

/// Take the next sequential campaign id and bump the counters.
pub fn allocate_id(env: &Env) -> Result<u64, Error> {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(Error::NotInitialized)?;
    env.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));

    let total: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0);
    env.storage().instance().set(&DataKey::CampaignCount, &(total + 1));
    extend_instance(env);

    Ok(id)
}

pub fn get(env: &Env, campaign_id: u64) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// The funding window has elapsed.
pub fn is_ended(env: &Env, campaign: &Campaign) -> bool {
    env.ledger().timestamp() >= campaign.deadline
}

pub fn goal_reached(campaign: &Campaign) -> bool {
    campaign.total_raised >= campaign.goal
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
