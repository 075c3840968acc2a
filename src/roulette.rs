use rand::Rng;
use crate::constants::{MAX_FULL_ROTATIONS, MIN_FULL_ROTATIONS};

pub const SLOT_COUNT: usize = 10;

/// Angular width of one slot, in degrees
pub const SLOT_ANGLE: f64 = 360.0 / SLOT_COUNT as f64;

/// Wheel rotation that centers slot 0 under the pointer.
///
/// Slot `i` is drawn from `i * SLOT_ANGLE - 90°` clockwise and the pointer sits
/// at the top (-90°), so slot 0 is centered under it at `-SLOT_ANGLE / 2`.
const SLOT_ZERO_ROTATION: f64 = 360.0 - SLOT_ANGLE / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Continue,
    Change,
    Exit,
}

/// One wheel segment; label and color are display-only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteSlot {
    pub kind: SlotKind,
    pub label: &'static str,
    pub color: &'static str,
}

const CONTINUE: RouletteSlot = RouletteSlot { kind: SlotKind::Continue, label: "→", color: "#22c55e" };
const CHANGE: RouletteSlot = RouletteSlot { kind: SlotKind::Change, label: "🔄", color: "#3b82f6" };
const EXIT: RouletteSlot = RouletteSlot { kind: SlotKind::Exit, label: "🚪", color: "#ef4444" };

/// 5 continue, 3 change, 2 exit
pub const ROULETTE_WITH_CHANGE: [RouletteSlot; SLOT_COUNT] = [
    CONTINUE, CHANGE, CONTINUE, EXIT, CONTINUE,
    CHANGE, CONTINUE, CHANGE, CONTINUE, EXIT,
];

/// 8 continue, 2 exit
pub const ROULETTE_NO_CHANGE: [RouletteSlot; SLOT_COUNT] = [
    CONTINUE, CONTINUE, CONTINUE, CONTINUE, EXIT,
    CONTINUE, CONTINUE, CONTINUE, CONTINUE, EXIT,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    WithChange,
    NoChange,
}

impl Wheel {
    #[must_use]
    pub fn for_correspondence(has_correspondence: bool) -> Self {
        if has_correspondence {
            Wheel::WithChange
        } else {
            Wheel::NoChange
        }
    }

    #[must_use]
    pub fn slots(self) -> &'static [RouletteSlot; SLOT_COUNT] {
        match self {
            Wheel::WithChange => &ROULETTE_WITH_CHANGE,
            Wheel::NoChange => &ROULETTE_NO_CHANGE,
        }
    }

    #[must_use]
    pub fn slot(self, index: usize) -> Option<RouletteSlot> {
        self.slots().get(index).copied()
    }
}

/// Uniformly pick a slot index in `0..SLOT_COUNT`
pub fn draw_slot<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..SLOT_COUNT)
}

/// Number of extra full turns for a spin animation
pub fn draw_full_rotations<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_FULL_ROTATIONS..=MAX_FULL_ROTATIONS)
}

/// Final wheel rotation (degrees, monotonically increasing) that lands `slot`
/// under the pointer after `full_rotations` extra turns
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn target_rotation(current: f64, slot: usize, full_rotations: u32) -> f64 {
    let current_mod = current.rem_euclid(360.0);
    let target_mod = (SLOT_ZERO_ROTATION - slot as f64 * SLOT_ANGLE).rem_euclid(360.0);
    let mut delta = target_mod - current_mod;
    if delta <= 0.0 {
        delta += 360.0;
    }
    current + f64::from(full_rotations) * 360.0 + delta
}

/// Slot index under the pointer for a given wheel rotation
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn slot_under_pointer(rotation: f64) -> usize {
    // Pointer angle in the wheel's own frame, measured clockwise from slot 0's leading edge
    let pointer = (-rotation).rem_euclid(360.0);
    (pointer / SLOT_ANGLE).floor() as usize % SLOT_COUNT
}
