//! Shared storage keys, records, and error codes.
//!
//! A campaign's "failed" state is never stored: `status` only ever holds
//! `Created`, `Active`, or `Settled`, and failure is derived from
//! `total_raised` and `deadline` at the point of a claim or refund so a
//! stale stored status can never disagree with the time-derived truth.

use soroban_sdk::{contracterror, contracttype, Address};

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    NextCampaignId,
    CampaignCount,
    Campaign(u64),
    Stake(u64, Address), // (CampaignID, Contributor)
}

/// Lifecycle status of a campaign.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    /// Registered but not started; no goal or deadline yet, cannot accept funds.
    Created,
    /// Funding window open until the deadline.
    Active,
    /// Owner has claimed the raised funds.
    Settled,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    /// Auto-incremented unique ID, never reused.
    pub id: u64,
    /// Address that registered the campaign; the only one allowed to
    /// start it and to claim its funds.
    pub owner: Address,
    /// Funding target in the token's smallest unit. 0 until started.
    pub goal: i128,
    /// Smallest contribution accepted by `fund`. Set at start; has no
    /// effect on goal or claim logic.
    pub min_contribution: i128,
    /// Ledger timestamp at which the funding window closes. 0 until started.
    pub deadline: u64,
    /// Sum of all stakes currently escrowed and not refunded.
    pub total_raised: i128,
    /// Current lifecycle status.
    pub status: CampaignStatus,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    NotOwner = 4,
    AlreadyStarted = 5,
    NotActive = 6,
    AlreadySettled = 7,
    InvalidGoal = 8,
    InvalidDeadline = 9,
    InvalidAmount = 10,
    CampaignEnded = 11,
    CampaignNotEnded = 12,
    GoalNotReached = 13,
    GoalReached = 14,
    NothingToRefund = 15,
    StakeOverflow = 16,
}
