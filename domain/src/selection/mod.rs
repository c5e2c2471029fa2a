//! Turn-selection domain
//!
//! This module contains the policies deciding which participant speaks next
//! in a group conversation.

pub mod plan;
pub mod strategy;
