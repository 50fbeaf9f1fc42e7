//! Deterministic grid fingerprinting.
//!
//! Uses FNV-1a over the grid dimensions and every cell's colour index.
//! The hash is not cryptographically secure; it exists for fast
//! equality checks between runs that should be identical.

use crate::grid::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a fingerprint of a grid's dimensions and cell colours.
///
/// Dimensions are folded in first so that two grids holding the same
/// row-major colour sequence in different shapes hash differently.
pub fn grid_fingerprint(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, grid.width());
    hash = fnv1a_u32(hash, grid.height());
    for &c in grid.cells() {
        hash = fnv1a_byte(hash, c.index());
    }
    hash
}
