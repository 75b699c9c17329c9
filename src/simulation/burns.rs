//! Time-delayed velocity impulses owned by a spacecraft
//!
//! Countdowns are measured in ticks, not simulation time: every call to
//! [`BurnQueue::tick`] takes exactly one off each pending burn, so a caller
//! converting a duration into a countdown must divide by the fixed `dt`.

use log::warn;

use super::states::NVec2;

/// A single scheduled impulse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledBurn {
    pub dv: NVec2, // velocity change applied when due
    pub countdown: f64, // ticks left before the burn is due
}

impl ScheduledBurn {
    /// A burn `countdown` ticks from now. A non-positive countdown is accepted
    /// and fires on the next tick.
    pub fn new(dv: NVec2, countdown: f64) -> Self {
        if countdown <= 0.0 {
            warn!("scheduled burn has non-positive countdown {countdown}, it will fire on the next tick");
        }
        Self { dv, countdown }
    }

    /// Fires once the countdown has dropped below zero
    pub fn is_due(&self) -> bool {
        self.countdown < 0.0
    }
}

/// Pending burns of one spacecraft, all checked every tick
#[derive(Debug, Clone, Default)]
pub struct BurnQueue {
    burns: Vec<ScheduledBurn>,
}

impl BurnQueue {
    pub fn new() -> Self {
        Self { burns: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.burns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.burns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledBurn> {
        self.burns.iter()
    }

    pub fn push(&mut self, burn: ScheduledBurn) {
        self.burns.push(burn);
    }

    /// Drop every pending burn and keep only `burn`
    pub fn replace(&mut self, burn: ScheduledBurn) {
        self.burns.clear();
        self.burns.push(burn);
    }

    /// Advance every burn by one tick.
    ///
    /// Every burn counts down by one. A burn whose countdown is now below zero
    /// adds its `dv` to `v` and is removed. A burn sitting at exactly zero
    /// stays and fires on the following tick. Returns how many fired.
    pub fn tick(&mut self, v: &mut NVec2) -> usize {
        let before = self.burns.len();
        self.burns.retain_mut(|burn| {
            burn.countdown -= 1.0;
            if burn.is_due() {
                *v += burn.dv;
                false
            } else {
                true
            }
        });
        before - self.burns.len()
    }
}
