//! The map session: an append-only render target.
//!
//! Features are only ever appended. Running the pipeline twice without an
//! explicit [`MapSession::clear`] leaves two copies of every feature.

use warning_common::{BoundingBox, MapView};

use crate::feature::{BufferFeature, MapFeature, MarkerFeature};
use crate::geojson::FeatureCollection;

#[derive(Debug, Clone, Default)]
pub struct MapSession {
    view: MapView,
    features: Vec<MapFeature>,
}

impl MapSession {
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            features: Vec::new(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn add(&mut self, feature: impl Into<MapFeature>) {
        self.features.push(feature.into());
    }

    pub fn add_buffer(&mut self, buffer: BufferFeature) {
        self.add(buffer);
    }

    pub fn add_marker(&mut self, marker: MarkerFeature) {
        self.add(marker);
    }

    /// Remove every feature. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.features.len();
        self.features.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in insertion order.
    pub fn features(&self) -> &[MapFeature] {
        &self.features
    }

    pub fn buffers(&self) -> impl Iterator<Item = &BufferFeature> {
        self.features.iter().filter_map(|f| match f {
            MapFeature::Buffer(b) => Some(b),
            MapFeature::Marker(_) => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerFeature> {
        self.features.iter().filter_map(|f| match f {
            MapFeature::Marker(m) => Some(m),
            MapFeature::Buffer(_) => None,
        })
    }

    /// Extent of all feature geometry in degrees.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let points = self.features.iter().flat_map(|f| -> Vec<(f64, f64)> {
            match f {
                MapFeature::Buffer(b) => b.polygon.exterior().coords().map(|c| (c.x, c.y)).collect(),
                MapFeature::Marker(m) => vec![(m.lng, m.lat)],
            }
        });
        BoundingBox::from_points(points)
    }

    /// Publish every feature, in insertion order.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut fc = FeatureCollection::new();
        fc.features = self
            .features
            .iter()
            .enumerate()
            .map(|(i, f)| f.to_geojson().with_id(format!("f{}", i)))
            .collect();
        fc
    }
}
