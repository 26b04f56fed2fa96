//! Cosmetic per-node colour
//!
//! Each row gets a background hue so neighbouring taxa are easy to tell
//! apart. The hue depends on the taxon name only; it never encodes rank,
//! depth or UI state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hue in degrees `[0, 360)` derived from a taxon name
pub fn hue_for(name: &str) -> u16 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    (hasher.finish() % 360) as u16
}

/// Convert a hue to a soft RGB triple (fixed saturation and lightness)
pub fn hue_to_rgb(hue: u16) -> (u8, u8, u8) {
    let h = f64::from(hue % 360) / 60.0;
    let (s, l) = (0.35, 0.30);
    let c = (1.0 - (2.0 * l - 1.0_f64).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}
