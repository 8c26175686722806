use crate::constants::{DEFAULT_MAX_POST_LENGTH, LEGACY_STATE_VERSION};
use crate::errors::PostsError;
use crate::events::PostsEvent;
use crate::state_versions::StateV010;
use crate::types::{ContractConfig, LikeKey, Post};
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::store::{LookupMap, Vector};
use near_sdk::{env, log, AccountId, BorshStorageKey};
use semver::Version;

const STATE_KEY: &[u8] = b"STATE";

#[derive(BorshSerialize, BorshDeserialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKey {
    Ledgers,
    Ledger { account_id: AccountId },
    Likes,
}

#[derive(BorshSerialize, BorshDeserialize, near_sdk_macros::NearSchema)]
#[borsh(crate = "near_sdk::borsh")]
#[abi(borsh)]
pub struct PostsContractState {
    pub version: String,
    pub ledgers: LookupMap<AccountId, Vector<Post>>,
    pub likes: LookupMap<LikeKey, bool>,
    pub owner: AccountId,
    pub max_post_length: u32,
}

impl PostsContractState {
    pub fn new(owner: AccountId, max_post_length: u32) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ledgers: LookupMap::new(StorageKey::Ledgers),
            likes: LookupMap::new(StorageKey::Likes),
            owner,
            max_post_length,
        }
    }

    pub fn create_post(&mut self, caller: &AccountId, content: String) -> Result<u64, PostsError> {
        if content.len() > self.max_post_length as usize {
            return Err(PostsError::ContentTooLong {
                max_length: self.max_post_length,
            });
        }

        let ledger = self.ledgers.entry(caller.clone()).or_insert_with(|| {
            Vector::new(StorageKey::Ledger {
                account_id: caller.clone(),
            })
        });
        let index = u64::from(ledger.len());
        ledger.push(Post {
            author: caller.clone(),
            content: content.clone(),
            like_count: 0,
            timestamp: env::block_timestamp(),
        });

        log!("Post {} created by {}", index, caller);
        PostsEvent::PostCreated {
            author: caller.clone(),
            index,
            content,
        }
        .emit();

        Ok(index)
    }

    pub fn get_post(&self, author: &AccountId, index: u64) -> Result<&Post, PostsError> {
        let index = u32::try_from(index).map_err(|_| PostsError::NotFound)?;
        self.ledgers
            .get(author)
            .and_then(|ledger| ledger.get(index))
            .ok_or(PostsError::NotFound)
    }

    fn get_post_mut(&mut self, author: &AccountId, index: u64) -> Result<&mut Post, PostsError> {
        let index = u32::try_from(index).map_err(|_| PostsError::NotFound)?;
        self.ledgers
            .get_mut(author)
            .and_then(|ledger| ledger.get_mut(index))
            .ok_or(PostsError::NotFound)
    }

    pub fn like_post(
        &mut self,
        caller: &AccountId,
        author: &AccountId,
        index: u64,
    ) -> Result<u64, PostsError> {
        self.get_post(author, index)?;
        let key = LikeKey {
            liker: caller.clone(),
            author: author.clone(),
            index,
        };
        if self.is_liked(&key) {
            return Err(PostsError::AlreadyLiked);
        }

        let post = self.get_post_mut(author, index)?;
        post.like_count += 1;
        let like_count = post.like_count;
        self.likes.insert(key, true);

        log!("{} liked post {} by {}", caller, index, author);
        PostsEvent::PostLiked {
            liker: caller.clone(),
            author: author.clone(),
            index,
            like_count,
        }
        .emit();

        Ok(like_count)
    }

    pub fn unlike_post(
        &mut self,
        caller: &AccountId,
        author: &AccountId,
        index: u64,
    ) -> Result<u64, PostsError> {
        self.get_post(author, index)?;
        let key = LikeKey {
            liker: caller.clone(),
            author: author.clone(),
            index,
        };
        if !self.is_liked(&key) {
            return Err(PostsError::NotLiked);
        }

        let post = self.get_post_mut(author, index)?;
        post.like_count -= 1;
        let like_count = post.like_count;
        self.likes.insert(key, false);

        log!("{} unliked post {} by {}", caller, index, author);
        PostsEvent::PostUnliked {
            liker: caller.clone(),
            author: author.clone(),
            index,
            like_count,
        }
        .emit();

        Ok(like_count)
    }

    pub fn set_max_post_length(
        &mut self,
        caller: &AccountId,
        new_length: u32,
    ) -> Result<(), PostsError> {
        if caller != &self.owner {
            return Err(PostsError::NotAuthorized);
        }
        let old_length = self.max_post_length;
        self.max_post_length = new_length;

        log!("Max post length changed from {} to {}", old_length, new_length);
        PostsEvent::MaxPostLengthChanged {
            owner: caller.clone(),
            old_length,
            new_length,
        }
        .emit();

        Ok(())
    }

    pub fn has_liked(&self, liker: &AccountId, author: &AccountId, index: u64) -> bool {
        self.is_liked(&LikeKey {
            liker: liker.clone(),
            author: author.clone(),
            index,
        })
    }

    fn is_liked(&self, key: &LikeKey) -> bool {
        *self.likes.get(key).unwrap_or(&false)
    }

    pub fn get_post_count(&self, author: &AccountId) -> u64 {
        self.ledgers
            .get(author)
            .map_or(0, |ledger| u64::from(ledger.len()))
    }

    pub fn get_config(&self) -> ContractConfig {
        ContractConfig {
            version: self.version.clone(),
            owner_id: self.owner.clone(),
            max_post_length: self.max_post_length,
        }
    }

    pub fn migrate() -> Self {
        const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
        let current_version =
            Version::parse(CURRENT_VERSION).expect("Invalid current version in Cargo.toml");

        let state_bytes: Vec<u8> = env::storage_read(STATE_KEY).unwrap_or_default();

        // Current layout, possibly written by an older release
        if let Ok(mut state) = near_sdk::borsh::from_slice::<PostsContractState>(&state_bytes) {
            if let Ok(state_version) = Version::parse(&state.version) {
                if state_version >= current_version {
                    env::log_str("State is at current or newer version, no migration needed");
                    return state;
                }
                log!("Updating state version from {}", state.version);
                state.version = CURRENT_VERSION.to_string();
                return state;
            }
        }

        // Fixed-limit layout
        if let Ok(old_state) = near_sdk::borsh::from_slice::<StateV010>(&state_bytes) {
            if let Ok(old_version) = Version::parse(&old_state.version) {
                if old_version <= Version::parse(LEGACY_STATE_VERSION).unwrap() {
                    env::log_str(&format!(
                        "Migrating from state version {}",
                        old_state.version
                    ));
                    let new_state = PostsContractState {
                        version: CURRENT_VERSION.to_string(),
                        ledgers: old_state.ledgers,
                        likes: old_state.likes,
                        owner: old_state.owner,
                        max_post_length: DEFAULT_MAX_POST_LENGTH,
                    };
                    PostsEvent::StateMigrated {
                        old_version: old_state.version,
                        new_version: CURRENT_VERSION.to_string(),
                    }
                    .emit();
                    return new_state;
                }
            }
        }

        env::log_str("No valid prior state found or unknown version, initializing new state");
        Self::new(env::current_account_id(), DEFAULT_MAX_POST_LENGTH)
    }
}
