// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Portal model SSOT.
//!
//! Records are plain data loaded once per request; everything ranked or
//! classified is derived from them and never persisted.

mod identity;
mod record;
mod tier;

pub use identity::{
    create_identity, referral_code_for, simulated_donations, Identity, REFERRAL_SUFFIX,
    SIMULATED_DONATION_BASE, SIMULATED_DONATION_SPAN,
};
pub use record::{Dataset, DonationRecord, RankedEntry, ValidationError};
pub use tier::{Medal, MilestoneStatus, RewardTier};

pub const CRATE_NAME: &str = "portal-model";
