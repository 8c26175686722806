use near_sdk::{near, AccountId};

#[near(event_json(standard = "nep297"))]
pub enum PostsEvent {
    #[event_version("1.0.0")]
    PostCreated { author: AccountId, index: u64, content: String },
    #[event_version("1.0.0")]
    PostLiked { liker: AccountId, author: AccountId, index: u64, like_count: u64 },
    #[event_version("1.0.0")]
    PostUnliked { liker: AccountId, author: AccountId, index: u64, like_count: u64 },
    #[event_version("1.0.0")]
    MaxPostLengthChanged { owner: AccountId, old_length: u32, new_length: u32 },
    #[event_version("1.0.0")]
    StateMigrated { old_version: String, new_version: String },
}
