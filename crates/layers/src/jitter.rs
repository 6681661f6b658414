use foundation::{Extent, LonLat};
use rand::Rng;

/// Spreads a point within `extent` so overlapping arc targets stay
/// distinguishable.
///
/// Each axis draws independently: a whole percent in 1..=100 of the axis
/// span, pushed to either side of the coordinate by half that amount on a
/// fair coin flip. The displacement therefore never exceeds half the span.
///
/// Every call draws fresh randomness; positions are recomputed per render
/// pass and never cached per record. Callers wanting stable jitter can pass
/// a seeded generator.
pub fn jitter_position(rng: &mut impl Rng, point: LonLat, extent: Extent) -> LonLat {
    LonLat::new(
        jitter_axis(rng, point.lon_deg, extent.lon_span_deg),
        jitter_axis(rng, point.lat_deg, extent.lat_span_deg),
    )
}

fn jitter_axis(rng: &mut impl Rng, coord: f64, span_deg: f64) -> f64 {
    let percent = rng.gen_range(1..=100) as f64 / 100.0;
    let amount = percent * span_deg;
    if rng.gen_bool(0.5) {
        coord + amount / 2.0
    } else {
        coord - amount / 2.0
    }
}
