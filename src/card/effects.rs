//! One-shot scatter of the decorative layers: where each sparkle and each
//! rising heart sits, how big it is, and how long its loop takes.
//!
//! The scatter runs once per mount and the result is never touched again;
//! the browser animates it from CSS keyframes. Nothing here depends on the
//! card's state machine.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sparkles scattered over the page.
pub const SPARKLE_COUNT: usize = 25;

/// Hearts drifting up the page.
pub const HEART_COUNT: usize = 40;

/// Sparkles pulse on a fixed period; only their placement and size are
/// random.
pub const SPARKLE_PULSE_SECS: f64 = 6.0;

/// One scattered decoration. Plain data: the layer component decides what
/// glyph to draw and which animation to attach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldItem {
    /// Horizontal position as a fraction of the viewport width.
    pub left: f64,
    /// Vertical position as a fraction of the viewport height.
    pub top: f64,
    pub scale: f64,
    /// Loop period in seconds, for layers that randomize their timing.
    pub duration: f64,
}

/// Scatter `count` items uniformly over the viewport.
pub fn scatter<R: Rng>(rng: &mut R, count: usize) -> Vec<FieldItem> {
    (0..count)
        .map(|_| FieldItem {
            left: rng.gen::<f64>(),
            top: rng.gen::<f64>(),
            scale: rng.gen_range(0.4..1.1),
            duration: rng.gen_range(15.0..35.0),
        })
        .collect()
}

/// RNG for the decorative layers. A fixed seed reproduces a layout exactly;
/// without one, every mount gets a fresh scatter.
pub fn layout_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_produces_exactly_the_requested_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(scatter(&mut rng, SPARKLE_COUNT).len(), 25);
        assert_eq!(scatter(&mut rng, HEART_COUNT).len(), 40);
    }

    #[test]
    fn every_field_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for item in scatter(&mut rng, 500) {
            assert!((0.0..1.0).contains(&item.left));
            assert!((0.0..1.0).contains(&item.top));
            assert!((0.4..1.1).contains(&item.scale));
            assert!((15.0..35.0).contains(&item.duration));
        }
    }

    #[test]
    fn the_same_seed_reproduces_the_layout() {
        let a = scatter(&mut layout_rng(Some(9)), HEART_COUNT);
        let b = scatter(&mut layout_rng(Some(9)), HEART_COUNT);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_move_the_decorations() {
        let a = scatter(&mut layout_rng(Some(1)), HEART_COUNT);
        let b = scatter(&mut layout_rng(Some(2)), HEART_COUNT);
        assert_ne!(a, b);
    }
}
