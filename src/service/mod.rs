//! Service layer module.
//!
//! Contains the generators and the theme preference logic.

pub mod alphabet;
pub mod credential;
pub mod identifier;
pub mod theme;
pub mod wordlist;

pub use credential::CredentialGenerator;
pub use identifier::IdentifierGenerator;
pub use theme::ThemeService;
pub use wordlist::WordLists;
