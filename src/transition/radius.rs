//! Swelling radius interpolation.
//!
//! Plain linear radius interpolation between two framing spheres can produce
//! an intermediate sphere that contains neither endpoint, clipping content
//! mid-flight. The swelling strategies widen the radius so that, for some
//! progress value, the interpolated sphere contains both endpoint spheres.

use glam::Vec3;

/// Linear interpolation, exact at both endpoints.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Component-wise [`lerp`] for vectors, exact at both endpoints.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Cubic going from `y(0) = 0` to `y(1) = 1`.
///
/// With `alpha = 1` the curve has an inflection point at 0 and a stationary
/// point at 1; with `alpha = 0` it is the identity.
#[inline]
pub fn nice_cubic(x: f32, alpha: f32) -> f32 {
    (1.0 + 0.5 * alpha) * x - 0.5 * alpha * x * x * x
}

/// Radius that swells between `r0` and `r1` so that some intermediate sphere
/// contains both endpoint spheres.
///
/// `dist` is the separation of the two sphere centers, `t` the progress.
pub fn swelling_cubic(r0: f32, r1: f32, dist: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return r0;
    }
    if t >= 1.0 {
        return r1;
    }
    if dist == 0.0 {
        return lerp(r0, r1, t);
    }
    if r1 >= dist + r0 {
        // Target sphere contains the source sphere.
        let alpha = dist / (r1 - r0);
        return lerp(r0, r1, nice_cubic(t, alpha));
    }
    if r0 >= dist + r1 {
        // Source sphere contains the target sphere.
        let alpha = dist / (r0 - r1);
        return lerp(r1, r0, nice_cubic(1.0 - t, alpha));
    }
    let t_max = (dist - r0 + r1) / (2.0 * dist);
    let r_max = 0.5 * (dist + r0 + r1);
    if t <= t_max {
        lerp(r0, r_max, nice_cubic(t / t_max, 1.0))
    } else {
        lerp(r1, r_max, nice_cubic((1.0 - t) / (1.0 - t_max), 1.0))
    }
}

/// Like [`swelling_cubic`], but swells less the more the spheres overlap and
/// degrades to plain linear interpolation once either sphere contains the
/// other's center.
pub fn swelling_smart(r0: f32, r1: f32, dist: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return r0;
    }
    if t >= 1.0 {
        return r1;
    }
    let overlap = relative_sphere_overlap(r0, r1, dist);
    if overlap <= 0.0 {
        return swelling_cubic(r0, r1, dist, t);
    }
    if overlap >= 1.0 {
        return lerp(r0, r1, t);
    }
    lerp(swelling_cubic(r0, r1, dist, t), lerp(r0, r1, t), overlap)
}

/// Measure of how much two spheres overlap: `<= 0` when disjoint, `>= 1` when
/// either contains the center of the other.
///
/// Returns `±inf` instead of dividing by a zero radius.
pub fn relative_sphere_overlap(r0: f32, r1: f32, dist: f32) -> f32 {
    let overlap = r0 + r1 - dist;
    if r0 == 0.0 || r1 == 0.0 {
        return if overlap >= 0.0 {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        };
    }
    overlap / r0.min(r1)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn lerp_is_exact_at_endpoints() {
        assert_eq!(lerp(0.1, 0.3, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.3, 1.0), 0.3);
        let a = Vec3::new(0.1, 0.2, 0.7);
        let b = Vec3::new(-3.3, 9.1, 0.3);
        assert_eq!(lerp_vec3(a, b, 1.0), b);
        assert_eq!(lerp_vec3(a, b, 0.0), a);
    }

    #[test]
    fn nice_cubic_spans_unit_interval() {
        for alpha in [0.0, 0.3, 1.0] {
            assert_eq!(nice_cubic(0.0, alpha), 0.0);
            assert!((nice_cubic(1.0, alpha) - 1.0).abs() < 1e-6);
        }
        assert!((nice_cubic(0.4, 0.0) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn cubic_is_linear_without_separation() {
        assert!((swelling_cubic(10.0, 20.0, 0.0, 0.5) - 15.0).abs() < EPS);
    }

    #[test]
    fn cubic_peaks_at_crossover_for_disjoint_spheres() {
        // t_max = 0.5, r_max = (10 + 5 + 5) / 2 = 10: the smallest sphere
        // enclosing both.
        let r = swelling_cubic(5.0, 5.0, 10.0, 0.5);
        assert!((r - 10.0).abs() < EPS);
        // Symmetric around the crossover.
        let left = swelling_cubic(5.0, 5.0, 10.0, 0.25);
        let right = swelling_cubic(5.0, 5.0, 10.0, 0.75);
        assert!((left - right).abs() < EPS);
        assert!(left > 5.0 && left < 10.0);
    }

    #[test]
    fn cubic_containment_is_monotonic() {
        // Target contains source: radius grows monotonically.
        let mut prev = swelling_cubic(1.0, 10.0, 2.0, 0.0);
        for i in 1..=20 {
            let r = swelling_cubic(1.0, 10.0, 2.0, i as f32 / 20.0);
            assert!(r >= prev - EPS);
            prev = r;
        }
        // Source contains target: radius shrinks monotonically.
        let mut prev = swelling_cubic(10.0, 1.0, 2.0, 0.0);
        for i in 1..=20 {
            let r = swelling_cubic(10.0, 1.0, 2.0, i as f32 / 20.0);
            assert!(r <= prev + EPS);
            prev = r;
        }
    }

    #[test]
    fn overlap_factor_sentinels() {
        assert_eq!(relative_sphere_overlap(0.0, 1.0, 0.5), f32::INFINITY);
        assert_eq!(relative_sphere_overlap(1.0, 0.0, 2.0), f32::NEG_INFINITY);
        assert!((relative_sphere_overlap(2.0, 4.0, 3.0) - 1.5).abs() < EPS);
        assert!(relative_sphere_overlap(1.0, 1.0, 5.0) < 0.0);
    }

    #[test]
    fn smart_is_linear_for_nested_centers() {
        // Overlap factor (4 + 4 - 1) / 4 >= 1.
        let r = swelling_smart(4.0, 8.0, 1.0, 0.5);
        assert!((r - 6.0).abs() < EPS);
    }

    #[test]
    fn smart_matches_cubic_for_disjoint_spheres() {
        let cubic = swelling_cubic(2.0, 3.0, 20.0, 0.3);
        let smart = swelling_smart(2.0, 3.0, 20.0, 0.3);
        assert!((cubic - smart).abs() < EPS);
    }

    #[test]
    fn smart_swells_less_than_cubic_for_partial_overlap() {
        // Overlap factor (5 + 5 - 8) / 5 = 0.4.
        let cubic = swelling_cubic(5.0, 5.0, 8.0, 0.5);
        let smart = swelling_smart(5.0, 5.0, 8.0, 0.5);
        assert!(smart < cubic);
        assert!(smart > 5.0);
    }

    #[test]
    fn smart_handles_zero_radius_without_nan() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(swelling_smart(0.0, 3.0, 1.0, t).is_finite());
            assert!(swelling_smart(0.0, 3.0, 10.0, t).is_finite());
            assert!(swelling_smart(3.0, 0.0, 10.0, t).is_finite());
        }
    }

    #[test]
    fn both_strategies_hit_endpoints_for_any_separation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r0 = rng.random_range(0.0..50.0);
            let r1 = rng.random_range(0.0..50.0);
            let dist = if rng.random_bool(0.1) {
                0.0
            } else {
                rng.random_range(0.0..100.0)
            };
            assert_eq!(swelling_cubic(r0, r1, dist, 0.0), r0);
            assert_eq!(swelling_cubic(r0, r1, dist, 1.0), r1);
            assert_eq!(swelling_smart(r0, r1, dist, 0.0), r0);
            assert_eq!(swelling_smart(r0, r1, dist, 1.0), r1);
        }
    }

    #[test]
    fn swelling_sphere_encloses_both_endpoints_at_crossover() {
        let (r0, r1, dist) = (3.0f32, 6.0f32, 20.0f32);
        let t_max = (dist - r0 + r1) / (2.0 * dist);
        let r = swelling_cubic(r0, r1, dist, t_max);
        // Center travels linearly from 0 to `dist`.
        let center = t_max * dist;
        assert!(center + r0 <= r + EPS);
        assert!((dist - center) + r1 <= r + EPS);
    }
}
