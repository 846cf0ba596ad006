//! # Booking Reference Derivation
//!
//! `BK-<unit prefix>-<base36 millis>-<4 random base36 chars>`, uppercase
//! throughout. Matching is exact and case-sensitive; the reference is a
//! correlation convenience, never a credential.

use rand::Rng;
use shared_types::UnitNumber;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Derive a booking reference for a handoff initiated now.
pub fn generate_booking_reference<R: Rng>(
    unit_number: &UnitNumber,
    now_millis: u64,
    rng: &mut R,
) -> String {
    let suffix: String = (0..4)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!(
        "BK-{}-{}-{}",
        unit_number.owner_prefix(),
        encode_base36(now_millis),
        suffix
    )
}

/// Uppercase base36 rendering of a u64.
fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}
