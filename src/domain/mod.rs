//! Domain models for Credforge.
//!
//! This module contains the generator configurations, the theme preference
//! and the API contracts.

pub mod credential;
pub mod dto;
pub mod identifier;
pub mod theme;

pub use credential::{CredentialConfig, GenerationMode, LengthBounds, Strength, SymbolSet};
pub use dto::{
    ApiResponse, BoundsQuery, CredentialBatchResponse, CredentialItem, IdentifierBatchResponse,
    ModeSwitchRequest, ThemeRequest, ThemeResponse,
};
pub use identifier::{IdentifierConfig, IdentifierStyle, Separator};
pub use theme::{Theme, ThemeRecord};
