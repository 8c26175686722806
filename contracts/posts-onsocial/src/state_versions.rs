use crate::types::{LikeKey, Post};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{LookupMap, Vector};
use near_sdk::AccountId;

/// 0.1.0 layout: the post length limit was a compile-time constant.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct StateV010 {
    pub version: String,
    pub ledgers: LookupMap<AccountId, Vector<Post>>,
    pub likes: LookupMap<LikeKey, bool>,
    pub owner: AccountId,
}
