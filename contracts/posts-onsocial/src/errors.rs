use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{env, FunctionError};
use near_sdk_macros::NearSchema;

#[derive(Debug, PartialEq, NearSchema, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub enum PostsError {
    ContentTooLong { max_length: u32 },
    NotFound,
    NotLiked,
    AlreadyLiked,
    NotAuthorized,
}

impl std::fmt::Display for PostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostsError::ContentTooLong { max_length } => {
                write!(f, "Post needs to be {} characters or less", max_length)
            }
            PostsError::NotFound => write!(f, "Post does not exist"),
            PostsError::NotLiked => {
                write!(f, "You cannot unlike a post that has not been liked")
            }
            PostsError::AlreadyLiked => write!(f, "You have already liked this post"),
            PostsError::NotAuthorized => write!(f, "You are not the owner"),
        }
    }
}

impl FunctionError for PostsError {
    fn panic(&self) -> ! {
        env::panic_str(&self.to_string())
    }
}
