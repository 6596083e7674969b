//! Peak-hour determination.
//!
//! Which slots bill at the off-peak tier is a product decision that has not
//! been made yet, so the decision is behind a trait. The default schedule
//! bills every slot at the peak tier.

use super::models::RateTier;
use super::slots::TimeSlot;

/// Decides the pricing tier for a time slot. Must be a pure function of the
/// slot with no side effects.
pub trait PeakSchedule: Send + Sync {
    /// Whether the given slot bills at the off-peak tier.
    fn is_off_peak(&self, slot: &TimeSlot) -> bool;

    fn tier_for(&self, slot: &TimeSlot) -> RateTier {
        if self.is_off_peak(slot) {
            RateTier::OffPeak
        } else {
            RateTier::Peak
        }
    }
}

/// Placeholder schedule: no off-peak window, everything bills at peak.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatPeak;

impl PeakSchedule for FlatPeak {
    fn is_off_peak(&self, _slot: &TimeSlot) -> bool {
        false
    }
}
