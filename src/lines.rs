//! Field-line set construction and per-geometry caching.

use crate::fields::{solenoid_field, FieldVector};
use crate::geometry::{CoilGeometry, FieldKey};
use crate::math::{linspace, R2, Scalar};
use crate::trace::{trace_bidirectional, Streamline, TraceBounds, TraceConfig};

/// Radial placement of the trace seeds. Interior seeds sit at evenly spaced
/// fractions of the winding radius, strictly inside the coil; exterior seeds
/// at multiples of the radius, from just outside the winding to several
/// radii out. All seeds sit on the coil's midplane (`z = 0`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedLayout {
    /// Number of interior seeds.
    pub interior: usize,
    /// Interior radii as fractions of the winding radius.
    pub interior_span: (Scalar, Scalar),
    /// Number of exterior seeds.
    pub exterior: usize,
    /// Exterior radii as multiples of the winding radius.
    pub exterior_span: (Scalar, Scalar),
}

impl Default for SeedLayout {
    fn default() -> Self {
        Self {
            interior: 5,
            interior_span: (0.15, 0.85),
            exterior: 4,
            exterior_span: (1.3, 3.5),
        }
    }
}

impl SeedLayout {
    /// Seed points for a winding of radius `coil_radius`.
    #[must_use]
    pub fn seeds(&self, coil_radius: Scalar) -> Vec<R2> {
        let (lo, hi) = self.interior_span;
        let mut seeds: Vec<R2> = linspace(lo * coil_radius, hi * coil_radius, self.interior)
            .into_iter()
            .map(|r| R2::new(r, 0.0))
            .collect();
        let (lo, hi) = self.exterior_span;
        seeds.extend(
            linspace(lo * coil_radius, hi * coil_radius, self.exterior)
                .into_iter()
                .map(|r| R2::new(r, 0.0)),
        );
        seeds
    }
}

/// Builds the traced field-line set for a coil and memoizes it.
///
/// The cache is a single slot keyed by [`CoilGeometry::cache_key`]: a call
/// with an unchanged key returns the stored set without touching the field
/// evaluator; a changed key recomputes and replaces the slot whole. This is
/// the only mutable state in the subsystem and it has a single writer — a
/// host embedding the builder across threads wraps it in a mutex.
#[derive(Debug, Default)]
pub struct FieldLineBuilder {
    layout: SeedLayout,
    cache: Option<(FieldKey, Vec<Streamline>)>,
}

impl FieldLineBuilder {
    /// Builder with the default seed layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with an explicit seed layout.
    #[must_use]
    pub fn with_layout(layout: SeedLayout) -> Self {
        Self {
            layout,
            cache: None,
        }
    }

    /// The cached set, if one is held for any key.
    #[must_use]
    pub fn cached(&self) -> Option<&[Streamline]> {
        self.cache.as_ref().map(|(_, lines)| lines.as_slice())
    }

    /// The field-line set for `geometry`, traced through
    /// [`solenoid_field`]. Cached per geometry key; a degenerate coil yields
    /// an empty set.
    pub fn compute_field_lines(&mut self, geometry: &CoilGeometry) -> &[Streamline] {
        self.compute_with(geometry, |r, z| solenoid_field(geometry, r, z))
    }

    fn compute_with<F>(&mut self, geometry: &CoilGeometry, mut field: F) -> &[Streamline]
    where
        F: FnMut(Scalar, Scalar) -> FieldVector,
    {
        let key = geometry.cache_key();
        let stale = match &self.cache {
            Some((cached_key, _)) => *cached_key != key,
            None => true,
        };
        if stale {
            let lines = self.build_lines(geometry, &mut field);
            self.cache = Some((key, lines));
        }
        match &self.cache {
            Some((_, lines)) => lines,
            None => &[],
        }
    }

    fn build_lines<F>(&self, geometry: &CoilGeometry, field: &mut F) -> Vec<Streamline>
    where
        F: FnMut(Scalar, Scalar) -> FieldVector,
    {
        if geometry.is_degenerate() {
            return Vec::new();
        }
        let config = TraceConfig::for_coil(geometry);
        let bounds = TraceBounds::for_coil(geometry);
        self.layout
            .seeds(geometry.radius)
            .into_iter()
            .map(|seed| trace_bidirectional(&mut *field, seed, &config, &bounds))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_coil() -> CoilGeometry {
        CoilGeometry::new(0.02, 0.2, 50, 2.0).unwrap()
    }

    #[test]
    fn seeds_split_into_interior_and_exterior_radii() {
        let layout = SeedLayout::default();
        let radius = 0.02;
        let seeds = layout.seeds(radius);
        assert_eq!(seeds.len(), layout.interior + layout.exterior);
        for seed in &seeds[..layout.interior] {
            assert!(seed.x > 0.0 && seed.x < radius, "interior seed at {}", seed.x);
            assert_eq!(seed.y, 0.0);
        }
        for seed in &seeds[layout.interior..] {
            assert!(seed.x > radius, "exterior seed at {}", seed.x);
        }
    }

    #[test]
    fn computes_one_line_per_seed() {
        let coil = test_coil();
        let mut builder = FieldLineBuilder::new();
        let lines = builder.compute_field_lines(&coil);
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|line| line.len() > 2));
    }

    #[test]
    fn unchanged_geometry_returns_identical_lines_without_reevaluation() {
        let coil = test_coil();
        let mut builder = FieldLineBuilder::new();

        let mut calls = 0_u64;
        let first = builder
            .compute_with(&coil, |r, z| {
                calls += 1;
                solenoid_field(&coil, r, z)
            })
            .to_vec();
        let calls_after_first = calls;
        assert!(calls_after_first > 0);

        let mut calls = 0_u64;
        let second = builder
            .compute_with(&coil, |r, z| {
                calls += 1;
                solenoid_field(&coil, r, z)
            })
            .to_vec();
        assert_eq!(calls, 0, "cache hit must not re-invoke the evaluator");
        assert_eq!(first, second);
    }

    #[test]
    fn changed_current_invalidates_the_cache() {
        let coil = test_coil();
        let mut builder = FieldLineBuilder::new();
        let first = builder.compute_field_lines(&coil).to_vec();

        let stronger = CoilGeometry { current: 4.0, ..coil };
        let mut calls = 0_u64;
        let second = builder
            .compute_with(&stronger, |r, z| {
                calls += 1;
                solenoid_field(&stronger, r, z)
            })
            .to_vec();
        assert!(calls > 0, "key change must recompute");
        // Doubling the current rescales magnitudes but leaves directions, so
        // the traced geometry matches; the cache slot was still replaced.
        assert_eq!(first.len(), second.len());
        assert_eq!(builder.cached().map(<[Streamline]>::len), Some(second.len()));
    }

    #[test]
    fn degenerate_coil_yields_empty_set() {
        let coil = CoilGeometry {
            radius: 0.0,
            length: 0.2,
            turns: 50,
            current: 2.0,
        };
        let mut builder = FieldLineBuilder::new();
        assert!(builder.compute_field_lines(&coil).is_empty());
    }

    #[test]
    fn cached_is_empty_until_first_compute() {
        let builder = FieldLineBuilder::new();
        assert!(builder.cached().is_none());
    }
}
