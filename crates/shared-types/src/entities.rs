//! # Core Domain Entities
//!
//! Defines the core ledger entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Accounts**: `AccountId`, `Account`
//! - **Transactions**: `Transaction`, `SpendKey`
//! - **Chain**: `BlockBody`, `Block`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an account.
///
/// A newtype over `String` so account names cannot be accidentally mixed
/// with amounts or block indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier carries no characters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A registered account with its spendable balance and committed stake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier.
    pub id: AccountId,
    /// Spendable balance in base units.
    pub balance: u64,
    /// Committed stake in base units (zero unless explicitly set).
    pub stake: u64,
}

impl Account {
    /// Creates an account with the given starting balance and zero stake.
    pub fn new(id: AccountId, balance: u64) -> Self {
        Self {
            id,
            balance,
            stake: 0,
        }
    }
}

/// A transfer of value between two accounts. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// The spending account.
    pub sender: AccountId,
    /// The receiving account.
    pub receiver: AccountId,
    /// Transferred amount in base units.
    pub amount: u64,
}

impl Transaction {
    /// Creates a transaction record.
    pub fn new(sender: AccountId, receiver: AccountId, amount: u64) -> Self {
        Self {
            sender,
            receiver,
            amount,
        }
    }

    /// The `(sender, amount)` pair that identifies this spend.
    pub fn spend_key(&self) -> SpendKey {
        SpendKey {
            sender: self.sender.clone(),
            amount: self.amount,
        }
    }
}

/// The `(sender, amount)` pair treated as the identity of a spend.
///
/// There is no per-transaction id: two transactions from the same sender
/// for the same amount are indistinguishable, and duplicate-detection
/// rejects the second one even when it is legitimate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpendKey {
    /// The spending account.
    pub sender: AccountId,
    /// The spent amount.
    pub amount: u64,
}

impl fmt::Display for SpendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.sender, self.amount)
    }
}

/// The payload of a sealed block.
///
/// Serializes untagged: the genesis block carries the literal marker
/// string, every other block carries its transaction sequence. The
/// distinction is therefore visible to the content hasher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockBody {
    /// The literal marker carried by the genesis block.
    Marker(String),
    /// The transactions sealed into a regular block.
    Transactions(Vec<Transaction>),
}

impl BlockBody {
    /// The marker string sealed into the genesis block.
    pub const GENESIS_MARKER: &'static str = "Genesis Block";

    /// The genesis payload.
    pub fn genesis() -> Self {
        Self::Marker(Self::GENESIS_MARKER.to_owned())
    }

    /// True for the genesis marker payload.
    pub fn is_genesis(&self) -> bool {
        matches!(self, Self::Marker(m) if m == Self::GENESIS_MARKER)
    }

    /// The sealed transactions; empty for the genesis marker.
    pub fn transactions(&self) -> &[Transaction] {
        match self {
            Self::Marker(_) => &[],
            Self::Transactions(txs) => txs,
        }
    }
}

/// A sealed block. Immutable once appended to the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block height, 1-based: the genesis block has index 1.
    pub index: u64,
    /// The sealed payload.
    pub transactions: BlockBody,
    /// Content hash of the predecessor, or `"0"` for genesis.
    pub previous_hash: String,
    /// The proof-of-work nonce this block was sealed with.
    pub nonce: u64,
}

impl Block {
    /// The `previous_hash` value carried by the genesis block.
    pub const GENESIS_PREVIOUS_HASH: &'static str = "0";

    /// Compute the content hash of this block.
    pub fn hash(&self) -> String {
        crate::hashing::content_hash(self)
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 1 && self.previous_hash == Self::GENESIS_PREVIOUS_HASH
    }
}
