use engine::record::{FlowDataset, FlowRecord};
use foundation::{LonLat, Rgba8};
use rand::Rng;

use crate::jitter::jitter_position;
use crate::layer::{Layer, LayerId};
use crate::symbology;

/// Pickable arc layer over the funding records.
///
/// The rendering boundary can call the per-record accessors itself, once
/// per visible record, or take a fully evaluated snapshot via `extract`.
/// Target positions draw fresh jitter on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowArcLayer {
    id: LayerId,
    /// Normalization maximum for the color and width ramps.
    pub max_outbound: f64,
}

impl FlowArcLayer {
    pub fn new(id: u64, max_outbound: f64) -> Self {
        Self {
            id: LayerId(id),
            max_outbound,
        }
    }

    pub fn for_dataset(id: u64, dataset: &FlowDataset) -> Self {
        Self::new(id, dataset.max_outbound)
    }

    pub fn source_position(&self, record: &FlowRecord) -> LonLat {
        record.from
    }

    /// Target position jittered within the record's extent; exact when the
    /// record carries none.
    pub fn target_position(&self, rng: &mut impl Rng, record: &FlowRecord) -> LonLat {
        match record.to_extent {
            Some(extent) => jitter_position(rng, record.to, extent),
            None => record.to,
        }
    }

    pub fn fill_color(&self, record: &FlowRecord) -> Rgba8 {
        symbology::color_for_magnitude(record.outbound, self.max_outbound)
    }

    pub fn stroke_width(&self, record: &FlowRecord) -> f32 {
        symbology::stroke_width_for_magnitude(record.outbound, self.max_outbound)
    }

    pub fn source_color(&self, record: &FlowRecord) -> Rgba8 {
        symbology::arc_source_color(record.outbound)
    }

    pub fn target_color(&self, record: &FlowRecord) -> Rgba8 {
        symbology::arc_target_color(record.outbound)
    }

    pub fn extract(&self, rng: &mut impl Rng, dataset: &FlowDataset) -> ArcSnapshot {
        let mut entries = Vec::with_capacity(dataset.records.len());
        for record in &dataset.records {
            entries.push(ArcVisual {
                source: self.source_position(record),
                target: self.target_position(rng, record),
                fill: self.fill_color(record),
                source_color: self.source_color(record),
                target_color: self.target_color(record),
                width: self.stroke_width(record),
            });
        }
        ArcSnapshot { entries }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcVisual {
    pub source: LonLat,
    pub target: LonLat,
    pub fill: Rgba8,
    pub source_color: Rgba8,
    pub target_color: Rgba8,
    pub width: f32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArcSnapshot {
    pub entries: Vec<ArcVisual>,
}

impl Layer for FlowArcLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn pickable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::FlowArcLayer;
    use engine::record::{FlowDataset, FlowRecord};
    use foundation::{Extent, LonLat, Rgba8};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset() -> FlowDataset {
        FlowDataset::from_records(vec![
            FlowRecord::new(LonLat::new(-98.0, 38.0), LonLat::new(10.0, 20.0), 100.0)
                .with_extent(Extent::new(4.0, 2.0)),
            FlowRecord::new(LonLat::new(-98.0, 38.0), LonLat::new(2.0, 47.0), 400.0),
        ])
    }

    #[test]
    fn extract_evaluates_every_record() {
        let data = dataset();
        let layer = FlowArcLayer::for_dataset(2, &data);
        let mut rng = StdRng::seed_from_u64(1);

        let snap = layer.extract(&mut rng, &data);
        assert_eq!(snap.entries.len(), 2);

        // Jittered target stays within half the extent of the raw one.
        let jittered = snap.entries[0].target;
        assert!(jittered.lon_deg >= 8.0 && jittered.lon_deg <= 12.0);
        assert!(jittered.lat_deg >= 19.0 && jittered.lat_deg <= 21.0);

        // No extent: the target passes through untouched.
        assert_eq!(snap.entries[1].target, LonLat::new(2.0, 47.0));

        // The dataset maximum maps to the top of both ramps.
        assert_eq!(snap.entries[1].fill, Rgba8::new(255, 128, 255, 0));
        assert_eq!(snap.entries[1].width, 10.0);
    }

    #[test]
    fn source_position_is_never_jittered() {
        let data = dataset();
        let layer = FlowArcLayer::for_dataset(2, &data);
        assert_eq!(
            layer.source_position(&data.records[0]),
            LonLat::new(-98.0, 38.0)
        );
    }
}
