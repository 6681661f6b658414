use engine::collection::FeatureCollection;
use engine::feature::FeatureId;
use foundation::{LonLat, Rgba8};

use crate::layer::{Layer, LayerId};
use crate::symbology;

/// Fixed visual constants for the country polygon layer. The shapes
/// themselves stay with the rendering boundary; this descriptor only
/// carries how to draw them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CountryStyle {
    pub fill: Rgba8,
    pub elevation: f32,
    pub line_width: f32,
    pub line_width_scale: f32,
    pub line_width_min_px: f32,
}

impl Default for CountryStyle {
    fn default() -> Self {
        Self {
            fill: symbology::COUNTRY_FILL,
            elevation: symbology::COUNTRY_ELEVATION,
            line_width: symbology::COUNTRY_LINE_WIDTH,
            line_width_scale: symbology::COUNTRY_LINE_WIDTH_SCALE,
            line_width_min_px: symbology::COUNTRY_LINE_WIDTH_MIN_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryEntry {
    pub id: FeatureId,
    pub name: String,
    pub centroid: LonLat,
    /// Marker radius derived from the feature's type label.
    pub radius: f32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountrySnapshot {
    pub entries: Vec<CountryEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryLayer {
    id: LayerId,
    pub style: CountryStyle,
}

impl CountryLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            style: CountryStyle::default(),
        }
    }

    pub fn extract(&self, data: &FeatureCollection) -> CountrySnapshot {
        let mut entries = Vec::with_capacity(data.len());
        for (id, feature) in data.iter() {
            entries.push(CountryEntry {
                id,
                name: feature.name.clone(),
                centroid: feature.centroid,
                radius: symbology::size_for_kind(feature.kind.as_deref().unwrap_or("")),
            });
        }
        CountrySnapshot { entries }
    }
}

impl Layer for CountryLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn pickable(&self) -> bool {
        true
    }
}
