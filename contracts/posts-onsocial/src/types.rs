use near_sdk::{near, AccountId};

/// A single entry in an author's ledger. Everything except `like_count` is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
#[near(serializers = [json, borsh])]
pub struct Post {
    pub author: AccountId,
    pub content: String,
    pub like_count: u64,
    /// Block timestamp (nanoseconds) of the creating call.
    pub timestamp: u64,
}

/// Like registry key. Posts are addressed by `(author, index)`, never by handle.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[near(serializers = [borsh])]
pub struct LikeKey {
    pub liker: AccountId,
    pub author: AccountId,
    pub index: u64,
}

#[derive(Clone, Debug, PartialEq)]
#[near(serializers = [json])]
pub struct ContractConfig {
    pub version: String,
    pub owner_id: AccountId,
    pub max_post_length: u32,
}
