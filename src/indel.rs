//! Bit-parallel indel distance kernel.
//!
//! The metric counts insertions and deletions only; substituting a symbol
//! costs one deletion plus one insertion. Equivalently,
//! `distance = len(a) + len(b) − 2·LCS(a, b)`, so the whole computation
//! reduces to an LCS length, evaluated with Hyyrö's bit-vector recurrence:
//! keep a state word `S` initialized to all ones, and for every candidate
//! byte `c`
//!
//! ```text
//! u = S & masks[c]
//! S = (S + u) | (S − u)
//! ```
//!
//! after which the number of zero bits in `S` is the LCS length. One state
//! word covers 64 pattern positions; for longer patterns the addition's
//! carry chains the blocks together, while the subtraction never borrows
//! because `u ⊆ S`.

use crate::pattern::PatternMasks;

// ---------------------------------------------------------------------------
// LCS length
// ---------------------------------------------------------------------------

/// Single-block path: pattern length in `1..=64`.
pub(crate) fn lcs_single(masks: &PatternMasks, candidate: &[u8]) -> usize {
    let mut state = u64::MAX;
    for &c in candidate {
        let u = state & masks.word(c);
        state = state.wrapping_add(u) | (state - u);
    }
    (!state).count_ones() as usize
}

/// Multi-block path. `scratch` is the reusable state row; it is reset here,
/// so stale contents from a previous call are fine.
pub(crate) fn lcs_multi(masks: &PatternMasks, candidate: &[u8], scratch: &mut Vec<u64>) -> usize {
    let blocks = masks.blocks();
    scratch.clear();
    scratch.resize(blocks, u64::MAX);

    for &c in candidate {
        let row = masks.row(c);
        let mut carry = 0u64;
        for (state, &mask) in scratch.iter_mut().zip(row) {
            let s = *state;
            let u = s & mask;
            let (sum, c1) = s.overflowing_add(u);
            let (sum, c2) = sum.overflowing_add(carry);
            carry = u64::from(c1 | c2);
            *state = sum | (s - u);
        }
    }

    scratch.iter().map(|s| (!s).count_ones() as usize).sum()
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Indel distance from a precomputed LCS length.
#[inline]
pub(crate) fn distance_from_lcs(pattern_len: usize, candidate_len: usize, lcs: usize) -> usize {
    pattern_len + candidate_len - 2 * lcs
}
