use foundation::Rgba8;

/// Country polygon fill: fully transparent; shapes hit-test but do not
/// paint over the base map.
pub const COUNTRY_FILL: Rgba8 = Rgba8::TRANSPARENT;
/// Extrusion height for country shapes.
pub const COUNTRY_ELEVATION: f32 = 30.0;
pub const COUNTRY_LINE_WIDTH: f32 = 1.0;
pub const COUNTRY_LINE_WIDTH_SCALE: f32 = 20.0;
pub const COUNTRY_LINE_WIDTH_MIN_PX: f32 = 2.0;

/// Stroke width an arc gets at the dataset maximum.
pub const ARC_STROKE_WIDTH_MAX: f32 = 10.0;

/// Linear magnitude ramp: `(255r, 128r, 255r, 255(1-r))` for
/// `r = magnitude / max_magnitude`.
///
/// The ratio is clamped to `[0, 1]`, so magnitudes outside the observed
/// range still land on valid channels. `max_magnitude <= 0` maps everything
/// to the zero end of the ramp.
pub fn color_for_magnitude(magnitude: f64, max_magnitude: f64) -> Rgba8 {
    let r = ratio(magnitude, max_magnitude);
    Rgba8::saturating(255.0 * r, 128.0 * r, 255.0 * r, 255.0 * (1.0 - r))
}

/// Stroke width scaled linearly with magnitude, up to
/// `ARC_STROKE_WIDTH_MAX`.
pub fn stroke_width_for_magnitude(magnitude: f64, max_magnitude: f64) -> f32 {
    (ratio(magnitude, max_magnitude) * ARC_STROKE_WIDTH_MAX as f64) as f32
}

/// Fixed radius class for a free-text type label.
///
/// Substring match, case sensitive, first match wins: "major" beats
/// "small" when a label contains both.
pub fn size_for_kind(kind: &str) -> f32 {
    if kind.contains("major") {
        return 100.0;
    }
    if kind.contains("small") {
        return 30.0;
    }
    60.0
}

/// Arc endpoint tint at the funding source.
pub fn arc_source_color(outbound: f64) -> Rgba8 {
    let s = outbound.max(0.0).sqrt();
    Rgba8::saturating(40.0, s + 40.0, 40.0, 255.0)
}

/// Arc endpoint tint at the funding target.
pub fn arc_target_color(outbound: f64) -> Rgba8 {
    let s = outbound.max(0.0).sqrt();
    Rgba8::saturating(s, 0.0, s, 255.0)
}

fn ratio(magnitude: f64, max_magnitude: f64) -> f64 {
    if max_magnitude <= 0.0 {
        return 0.0;
    }
    (magnitude / max_magnitude).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{
        arc_source_color, arc_target_color, color_for_magnitude, size_for_kind,
        stroke_width_for_magnitude,
    };
    use foundation::Rgba8;

    const MAX: f64 = 350_499_850.5;

    #[test]
    fn ramp_endpoints() {
        assert_eq!(color_for_magnitude(0.0, MAX), Rgba8::new(0, 0, 0, 255));
        assert_eq!(color_for_magnitude(MAX, MAX), Rgba8::new(255, 128, 255, 0));
    }

    #[test]
    fn ramp_clamps_out_of_range_magnitudes() {
        assert_eq!(
            color_for_magnitude(MAX * 3.0, MAX),
            Rgba8::new(255, 128, 255, 0)
        );
        assert_eq!(color_for_magnitude(-1.0, MAX), Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn ramp_handles_degenerate_maximum() {
        assert_eq!(color_for_magnitude(5.0, 0.0), Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn stroke_width_scales_to_ten() {
        assert_eq!(stroke_width_for_magnitude(0.0, MAX), 0.0);
        assert_eq!(stroke_width_for_magnitude(MAX, MAX), 10.0);
        assert_eq!(stroke_width_for_magnitude(MAX * 2.0, MAX), 10.0);
        assert_eq!(stroke_width_for_magnitude(MAX / 2.0, MAX), 5.0);
    }

    #[test]
    fn size_classes_match_in_priority_order() {
        assert_eq!(size_for_kind("major airport"), 100.0);
        assert_eq!(size_for_kind("small strip"), 30.0);
        assert_eq!(size_for_kind("heliport"), 60.0);
        // "major" is tested first, so a label carrying both resolves large.
        assert_eq!(size_for_kind("major small"), 100.0);
        // Case sensitive by design.
        assert_eq!(size_for_kind("Major"), 60.0);
    }

    #[test]
    fn endpoint_tints_saturate() {
        let source = arc_source_color(1.0e12);
        assert_eq!(source, Rgba8::new(40, 255, 40, 255));

        let target = arc_target_color(1.0e12);
        assert_eq!(target, Rgba8::new(255, 0, 255, 255));

        assert_eq!(arc_source_color(0.0), Rgba8::new(40, 40, 40, 255));
        assert_eq!(arc_target_color(0.0), Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn endpoint_tints_use_square_root() {
        let c = arc_target_color(10_000.0);
        assert_eq!(c, Rgba8::new(100, 0, 100, 255));
    }
}
