//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `UserIdentity`, `AuthState`
//! - **Wallets**: `WalletKind`, `ChainKind`, `WalletBindingStatus`, `ConnectedWallet`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseKindError;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Identity returned by the auth API after a Google or wallet login.
///
/// Only the fields the client reads are typed; everything else the server
/// sends is kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Contact email (empty for wallet-only accounts).
    #[serde(default)]
    pub email: String,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Account creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: String,
    /// Server fields this client does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserIdentity {
    /// Create an identity with no extra fields.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: String::new(),
            avatar: None,
            created_at: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Builder-style method to set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// Authentication state as observed by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthState {
    /// The session has not been rehydrated yet.
    #[default]
    Loading,
    /// A user identity is present.
    Authenticated,
    /// The session is known to be empty.
    Unauthenticated,
}

impl AuthState {
    /// Whether the state is final enough for views to act on.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

// =============================================================================
// CLUSTER B: WALLETS
// =============================================================================

/// Wallet extensions the login flow knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    /// MetaMask browser extension.
    Metamask,
    /// OKX Wallet browser extension.
    Okx,
    /// Phantom browser extension (declared, not connectable yet).
    Phantom,
}

impl WalletKind {
    /// Name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Metamask => "MetaMask",
            Self::Okx => "OKX Wallet",
            Self::Phantom => "Phantom",
        }
    }

    /// Identifier used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metamask => "metamask",
            Self::Okx => "okx",
            Self::Phantom => "phantom",
        }
    }

    /// Whether this wallet can hold an account on `chain`.
    pub fn supports_chain(&self, chain: ChainKind) -> bool {
        match self {
            Self::Metamask => chain.is_evm(),
            Self::Okx => chain.is_evm() || chain == ChainKind::Aptos,
            Self::Phantom => chain == ChainKind::Solana,
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metamask" => Ok(Self::Metamask),
            "okx" => Ok(Self::Okx),
            "phantom" => Ok(Self::Phantom),
            other => Err(ParseKindError::UnknownWallet(other.to_string())),
        }
    }
}

/// Target networks an address can be interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    /// Ethereum mainnet.
    Ethereum,
    /// Flow, addressed through its EVM endpoint.
    Flow,
    /// Aptos (Move accounts, not EVM).
    Aptos,
    /// BNB Smart Chain.
    Bsc,
    /// Solana.
    Solana,
}

impl ChainKind {
    /// All chains, in the order the login panel lists them.
    pub const ALL: [ChainKind; 5] = [
        ChainKind::Ethereum,
        ChainKind::Flow,
        ChainKind::Aptos,
        ChainKind::Bsc,
        ChainKind::Solana,
    ];

    /// Whether accounts on this chain are requested with `eth_requestAccounts`.
    pub fn is_evm(&self) -> bool {
        matches!(self, Self::Ethereum | Self::Flow | Self::Bsc)
    }

    /// Name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Flow => "Flow",
            Self::Aptos => "Aptos",
            Self::Bsc => "BSC",
            Self::Solana => "Solana",
        }
    }

    /// Identifier used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Flow => "flow",
            Self::Aptos => "aptos",
            Self::Bsc => "bsc",
            Self::Solana => "solana",
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ethereum" => Ok(Self::Ethereum),
            "flow" => Ok(Self::Flow),
            "aptos" => Ok(Self::Aptos),
            "bsc" => Ok(Self::Bsc),
            "solana" => Ok(Self::Solana),
            other => Err(ParseKindError::UnknownChain(other.to_string())),
        }
    }
}

/// Relationship between a wallet address and the known user account.
///
/// `Unknown` until a wallet login has reached the binding check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletBindingStatus {
    /// Address belongs to the current account.
    LinkedToSelf,
    /// Address is not linked to any account.
    NotLinked,
    /// Address belongs to a different account.
    LinkedToOther,
    /// No wallet login has been attempted.
    #[default]
    Unknown,
}

/// Persisted record of the wallet a login completed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedWallet {
    /// Active address.
    pub address: String,
    /// Wallet extension used.
    pub wallet_type: WalletKind,
    /// Chain the address was requested for.
    pub chain_type: ChainKind,
}
