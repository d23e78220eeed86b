//! Domain entities representing core business objects.

pub mod principal;
pub mod token;

// Re-export commonly used types
pub use principal::Principal;
pub use token::{
    ClaimSet, Claims, TokenKind, TokenPair, CLAIM_EXP, CLAIM_JTI, CLAIM_TOKEN_TYPE, CLAIM_USER_ID,
};
