//! Quiz play bounded context.
//!
//! Responsible for answer checking and the random play-through, whose
//! progress lives in the player's session between requests.

pub mod application;
pub mod domain;
