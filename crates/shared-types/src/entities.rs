//! # Core Shared Entities
//!
//! Cross-subsystem type aliases. Kept deliberately small: the subsystem
//! crates own their domain entities, this module only pins down the
//! identifiers they exchange.

/// A 32-byte hash (output of the configured [`crate::Hasher`]).
pub type Hash = [u8; 32];

/// Identifier of a shard on the network.
pub type ShardId = u32;

/// Epoch number used for validator set lookups.
pub type Epoch = u32;

/// Block nonce (height) on the main chain.
pub type Nonce = u64;

/// Opaque validator public key bytes.
///
/// Key length depends on the signing scheme of the network, so keys are
/// carried as owned byte vectors rather than fixed arrays.
pub type PublicKey = Vec<u8>;
