use crate::feature::{Feature, FeatureId};

/// Ordered feature storage, indexable by `FeatureId`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a feature and returns its id. Ids are positional and never
    /// reused, so flow keys resolve for the lifetime of the collection.
    pub fn push(&mut self, feature: Feature) -> FeatureId {
        let id = FeatureId(self.features.len() as u32);
        self.features.push(feature);
        id
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(id.index())
    }

    /// First feature whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<FeatureId> {
        self.features
            .iter()
            .position(|f| f.name == name)
            .map(|idx| FeatureId(idx as u32))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates features in id order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &Feature)> {
        self.features
            .iter()
            .enumerate()
            .map(|(idx, f)| (FeatureId(idx as u32), f))
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureCollection;
    use crate::feature::{Feature, FeatureId};
    use foundation::LonLat;

    #[test]
    fn push_assigns_positional_ids() {
        let mut data = FeatureCollection::new();
        let a = data.push(Feature::new("A", LonLat::new(0.0, 0.0)));
        let b = data.push(Feature::new("B", LonLat::new(1.0, 1.0)));
        assert_eq!(a, FeatureId(0));
        assert_eq!(b, FeatureId(1));
        assert_eq!(data.get(b).expect("feature B").name, "B");
        assert!(data.get(FeatureId(2)).is_none());
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut data = FeatureCollection::new();
        data.push(Feature::new("USA", LonLat::new(-98.0, 38.0)));
        data.push(Feature::new("France", LonLat::new(2.0, 47.0)));
        assert_eq!(data.find_by_name("France"), Some(FeatureId(1)));
        assert_eq!(data.find_by_name("Atlantis"), None);
    }
}
