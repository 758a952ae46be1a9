//! Seed material for initializing generators.
//!
//! A seed combines a time-varying base with an identity-based value (the
//! addresses of fresh heap allocations plus a process-wide sequence
//! number) through a xor-shift avalanche mix. The result is meant for
//! seeding other generators, not as a random source of its own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0x9E37_79B9_7F4A_7C15);

/// Derives a 64-bit seed from the current time.
pub fn seed() -> u64 {
    seed_from(nano_time())
}

/// Derives a 64-bit seed from `base` mixed with identity entropy.
pub fn seed_from(base: u64) -> u64 {
    let value = mix(base, identity_seed());
    log::trace!("derived seed {value:#018x} from base {base:#018x}");
    value
}

/// Fills `buf` with seed bytes, eight at a time from successive
/// [`seed`] calls, least significant byte first.
pub fn seed_into(buf: &mut [u8]) {
    for chunk in buf.chunks_mut(8) {
        let bytes = seed().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}

/// Returns `length` freshly derived seed bytes.
pub fn seed_bytes(length: usize) -> Vec<u8> {
    let mut buf = vec![0u8; length];
    seed_into(&mut buf);
    buf
}

fn mix(a: u64, b: u64) -> u64 {
    let mut c = a ^ b;
    c ^= c << 17;
    c ^= c >> 31;
    c ^= c << 8;
    c
}

fn identity_seed() -> u64 {
    let hi = Box::new(0u8);
    let lo = Box::new(0u8);
    let hi_addr = &*hi as *const u8 as u64;
    let lo_addr = &*lo as *const u8 as u64;
    let sequence = SEQUENCE.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed);
    ((hi_addr << 32) | (lo_addr & 0xFFFF_FFFF)) ^ sequence
}

fn nano_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
