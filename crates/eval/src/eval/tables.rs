// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Lookup tables indexed by a 13 bits ranks mask.
//!
//! Tables are built at compile time so there is no runtime initialization and
//! they can be shared by any number of threads.

/// Number of distinct ranks masks.
const MASKS: usize = 1 << 13;

/// Marks a ranks mask with no straight.
pub const NO_STRAIGHT: u8 = 0xff;

/// The wheel A-2-3-4-5 mask.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Returns the top rank of the highest straight in `mask` or [NO_STRAIGHT].
const fn straight_top(mask: u16) -> u8 {
    let m = mask & (mask << 1) & (mask << 2) & (mask << 3) & (mask << 4);
    if m != 0 {
        // Bit i set means ranks i-4..=i are all in the mask.
        (15 - m.leading_zeros()) as u8
    } else if mask & WHEEL == WHEEL {
        3
    } else {
        NO_STRAIGHT
    }
}

const fn make_straights() -> [u8; MASKS] {
    let mut t = [NO_STRAIGHT; MASKS];
    let mut mask = 0;
    while mask < MASKS {
        t[mask] = straight_top(mask as u16);
        mask += 1;
    }

    t
}

/// Packs the five highest ranks in `mask` as nibbles in descending order, the
/// highest rank in bits 16..20, missing ranks are zero in the low nibbles.
const fn top_five(mask: u16) -> u32 {
    let mut packed = 0;
    let mut shift = 16;
    let mut rank = 13;
    while rank > 0 {
        rank -= 1;
        if mask & (1u16 << rank) != 0 {
            packed |= (rank as u32) << shift;
            if shift == 0 {
                break;
            }

            shift -= 4;
        }
    }

    packed
}

const fn make_kickers() -> [u32; MASKS] {
    let mut t = [0; MASKS];
    let mut mask = 0;
    while mask < MASKS {
        t[mask] = top_five(mask as u16);
        mask += 1;
    }

    t
}

/// Highest straight top rank for each ranks mask, the wheel top rank is five.
pub static STRAIGHTS: [u8; MASKS] = make_straights();

/// The five highest ranks of each ranks mask packed as nibbles.
pub static KICKERS: [u32; MASKS] = make_kickers();

/// Returns the `n` highest ranks in mask packed in the lowest `4 * n` bits.
#[inline]
pub fn top_ranks(mask: u16, n: u32) -> u32 {
    debug_assert!((1..=5).contains(&n));
    KICKERS[mask as usize] >> (4 * (5 - n))
}
