use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignStartedEvent {
    pub campaign_id: u64,
    pub goal: i128,
    pub min_contribution: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionReceivedEvent {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsClaimedEvent {
    pub campaign_id: u64,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionRefundedEvent {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_contribution_received(env: &Env, event: ContributionReceivedEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution_received"),), event);
}

pub fn emit_funds_claimed(env: &Env, event: FundsClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_claimed"),), event);
}

pub fn emit_contribution_refunded(env: &Env, event: ContributionRefundedEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution_refunded"),), event);
}
