#![no_std]

mod campaign;
mod events;
mod payment;
mod stakes;
mod storage_types;


use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use storage_types::{Campaign, CampaignStatus, DataKey, Error};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Set the value token all campaigns escrow and settle in. One-shot.
    pub fn initialize(env: Env, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        env.storage().instance().set(&DataKey::CampaignCount, &0u64);
        campaign::extend_instance(&env);

        Ok(())
    }

    /// Register a new campaign for `owner`. Goal, contribution floor and
    /// deadline are fixed later by `start_campaign`; until then the
    /// campaign cannot accept funds. Returns the new campaign id.
    pub fn create_campaign(env: Env, owner: Address) -> Result<u64, Error> {
        owner.require_auth();

        let id = campaign::allocate_id(&env)?;
        let record = Campaign {
            id,
            owner: owner.clone(),
            goal: 0,
            min_contribution: 0,
            deadline: 0,
            total_raised: 0,
            status: CampaignStatus::Created,
        };
        campaign::save(&env, &record);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id: id,
                owner,
            },
        );

        Ok(id)
    }

    /// Open the funding window. Only the campaign owner may start, exactly
    /// once, with a positive goal and a deadline strictly in the future.
    pub fn start_campaign(
        env: Env,
        caller: Address,
        campaign_id: u64,
        goal: i128,
        min_contribution: i128,
        deadline: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut record = campaign::get(&env, campaign_id)?;
        if caller != record.owner {
            return Err(Error::NotOwner);
        }
        if record.status != CampaignStatus::Created {
            return Err(Error::AlreadyStarted);
        }
        if goal <= 0 {
            return Err(Error::InvalidGoal);
        }
        if min_contribution < 0 {
            return Err(Error::InvalidAmount);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }

        record.goal = goal;
        record.min_contribution = min_contribution;
        record.deadline = deadline;
        record.status = CampaignStatus::Active;
        campaign::save(&env, &record);

        events::emit_campaign_started(
            &env,
            events::CampaignStartedEvent {
                campaign_id,
                goal,
                min_contribution,
                deadline,
            },
        );

        Ok(())
    }

    /// Escrow `amount` of the value token from `contributor` into the
    /// campaign. The contributor must have approved the contract for at
    /// least `amount` beforehand; the pull happens before any stake is
    /// credited, so a rejected transfer leaves the ledger untouched.
    pub fn fund(
        env: Env,
        contributor: Address,
        campaign_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();

        let mut record = campaign::get(&env, campaign_id)?;
        if record.status != CampaignStatus::Active {
            return Err(Error::NotActive);
        }
        if campaign::is_ended(&env, &record) {
            return Err(Error::CampaignEnded);
        }
        if amount <= 0 || amount < record.min_contribution {
            return Err(Error::InvalidAmount);
        }
        let total = record
            .total_raised
            .checked_add(amount)
            .ok_or(Error::StakeOverflow)?;

        payment::pull(&env, &contributor, amount)?;

        stakes::increase(&env, campaign_id, &contributor, amount)?;
        record.total_raised = total;
        campaign::save(&env, &record);

        events::emit_contribution_received(
            &env,
            events::ContributionReceivedEvent {
                campaign_id,
                contributor,
                amount,
                total_raised: total,
            },
        );

        Ok(())
    }

    /// Withdraw the raised funds after a successful campaign. Pays out
    /// exactly the configured goal; anything raised beyond it stays in
    /// contract custody. Individual stakes are left as they are; a
    /// settled campaign forecloses all refunds through the goal check.
    pub fn claim(env: Env, caller: Address, campaign_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut record = campaign::get(&env, campaign_id)?;
        if caller != record.owner {
            return Err(Error::NotOwner);
        }
        match record.status {
            CampaignStatus::Created => return Err(Error::NotActive),
            CampaignStatus::Settled => return Err(Error::AlreadySettled),
            CampaignStatus::Active => {}
        }
        // An unmet goal can never be claimed, no matter how much time passed.
        if !campaign::goal_reached(&record) {
            return Err(Error::GoalNotReached);
        }
        // Reaching the goal early does not unlock an early claim.
        if !campaign::is_ended(&env, &record) {
            return Err(Error::CampaignNotEnded);
        }

        // Settle before value leaves custody.
        record.status = CampaignStatus::Settled;
        campaign::save(&env, &record);

        payment::push(&env, &record.owner, record.goal)?;

        events::emit_funds_claimed(
            &env,
            events::FundsClaimedEvent {
                campaign_id,
                owner: record.owner,
                amount: record.goal,
            },
        );

        Ok(())
    }

    /// Reclaim the caller's own stake after a failed campaign. The stake
    /// is cleared before the value moves back out, and a second call
    /// finds nothing to refund.
    pub fn refund(env: Env, contributor: Address, campaign_id: u64) -> Result<(), Error> {
        contributor.require_auth();

        let mut record = campaign::get(&env, campaign_id)?;
        if record.status == CampaignStatus::Created {
            return Err(Error::NotActive);
        }
        if !campaign::is_ended(&env, &record) {
            return Err(Error::CampaignNotEnded);
        }
        if campaign::goal_reached(&record) {
            return Err(Error::GoalReached);
        }

        let amount = stakes::clear(&env, campaign_id, &contributor);
        if amount == 0 {
            return Err(Error::NothingToRefund);
        }
        record.total_raised -= amount;
        campaign::save(&env, &record);

        payment::push(&env, &contributor, amount)?;

        events::emit_contribution_refunded(
            &env,
            events::ContributionRefundedEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    pub fn get_campaign(env: Env, campaign_id: u64) -> Option<Campaign> {
        env.storage()
            .persistent()
            .get(&DataKey::Campaign(campaign_id))
    }

    /// Current escrowed stake of `contributor` in the campaign, 0 if none.
    pub fn get_stake(env: Env, campaign_id: u64, contributor: Address) -> i128 {
        stakes::get(&env, campaign_id, &contributor)
    }

    /// Ids of campaigns that have not been settled yet. Display only.
    pub fn list_active(env: Env) -> Vec<u64> {
        let next: u64 = env
            .storage()
            .instance()
            .get(&DataKey::NextCampaignId)
            .unwrap_or(1);

        let mut ids = Vec::new(&env);
        for id in 1..next {
            if let Some(record) = env
                .storage()
                .persistent()
                .get::<DataKey, Campaign>(&DataKey::Campaign(id))
            {
                if record.status != CampaignStatus::Settled {
                    ids.push_back(id);
                }
            }
        }
        ids
    }

    /// Number of campaigns ever created.
    pub fn count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::CampaignCount)
            .unwrap_or(0)
    }

    pub fn token(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Token)
    }
}
