//! Per-account append-only posts with like counters and an owner-controlled length limit.

use crate::constants::DEFAULT_MAX_POST_LENGTH;
use crate::errors::PostsError;
use crate::state::PostsContractState;
use crate::types::{ContractConfig, Post};
use near_sdk::{env, near, AccountId, PanicOnDefault};

pub mod constants;
pub mod errors;
mod events;
pub mod state;
pub mod state_versions;
pub mod types;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct PostsContract {
    state: PostsContractState,
}

#[near]
impl PostsContract {
    /// Owner defaults to the deploying account, limit to `DEFAULT_MAX_POST_LENGTH`.
    #[init]
    pub fn new(owner_id: Option<AccountId>, max_post_length: Option<u32>) -> Self {
        Self {
            state: PostsContractState::new(
                owner_id.unwrap_or_else(env::predecessor_account_id),
                max_post_length.unwrap_or(DEFAULT_MAX_POST_LENGTH),
            ),
        }
    }

    /// Appends to the caller's ledger and returns the new post's index.
    #[handle_result]
    pub fn create_post(&mut self, content: String) -> Result<u64, PostsError> {
        self.state
            .create_post(&env::predecessor_account_id(), content)
    }

    #[handle_result]
    pub fn get_post(&self, author: AccountId, index: u64) -> Result<Post, PostsError> {
        self.state.get_post(&author, index).cloned()
    }

    /// Returns the post's like count after the like.
    #[handle_result]
    pub fn like_post(&mut self, author: AccountId, index: u64) -> Result<u64, PostsError> {
        self.state
            .like_post(&env::predecessor_account_id(), &author, index)
    }

    /// Returns the post's like count after the unlike.
    #[handle_result]
    pub fn unlike_post(&mut self, author: AccountId, index: u64) -> Result<u64, PostsError> {
        self.state
            .unlike_post(&env::predecessor_account_id(), &author, index)
    }

    #[handle_result]
    pub fn set_max_post_length(&mut self, new_length: u32) -> Result<(), PostsError> {
        self.state
            .set_max_post_length(&env::predecessor_account_id(), new_length)
    }

    pub fn get_max_post_length(&self) -> u32 {
        self.state.max_post_length
    }

    pub fn get_owner(&self) -> AccountId {
        self.state.owner.clone()
    }

    pub fn get_post_count(&self, author: AccountId) -> u64 {
        self.state.get_post_count(&author)
    }

    pub fn has_liked(&self, liker: AccountId, author: AccountId, index: u64) -> bool {
        self.state.has_liked(&liker, &author, index)
    }

    pub fn get_config(&self) -> ContractConfig {
        self.state.get_config()
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        Self {
            state: PostsContractState::migrate(),
        }
    }
}
