//! Procedural starfield generation.
//!
//! Stars are placed once at scene construction on a spherical shell
//! around the origin and never move afterwards.

use std::f64::consts::{PI, TAU};

use bevy::math::DVec3;
use rand::Rng;

/// Generate `count` star positions on the shell `[min_radius, max_radius]`
/// using the thread-local RNG.
pub fn generate_stars(count: usize, min_radius: f64, max_radius: f64) -> Vec<DVec3> {
    let mut rng = rand::thread_rng();
    generate_stars_with(&mut rng, count, min_radius, max_radius)
}

/// Generate star positions with a caller-supplied RNG, so tests can seed
/// the distribution.
///
/// Each star draws a radius uniformly from the shell and spherical angles
/// `theta in [0, 2pi)`, `phi in [0, pi]`. Sampling `phi` uniformly (rather
/// than through an inverse-cosine transform) leans star density toward
/// the poles slightly; that is fine for a decorative backdrop.
pub fn generate_stars_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min_radius: f64,
    max_radius: f64,
) -> Vec<DVec3> {
    debug_assert!(0.0 <= min_radius && min_radius <= max_radius);

    (0..count)
        .map(|_| {
            let r = rng.gen_range(min_radius..=max_radius);
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(0.0..=PI);
            DVec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every generated star lies within the requested shell, for any
        /// shell and count.
        #[test]
        fn prop_stars_stay_on_shell(
            seed in any::<u64>(),
            count in 0usize..200,
            min_radius in 1.0f64..500.0,
            span in 0.0f64..500.0,
        ) {
            let max_radius = min_radius + span;
            let mut rng = StdRng::seed_from_u64(seed);
            let stars = generate_stars_with(&mut rng, count, min_radius, max_radius);

            prop_assert_eq!(stars.len(), count);
            for star in &stars {
                let magnitude = star.length();
                prop_assert!(
                    magnitude >= min_radius - 1e-9 && magnitude <= max_radius + 1e-9,
                    "star at {} outside [{}, {}]",
                    magnitude, min_radius, max_radius
                );
            }
        }
    }
}
