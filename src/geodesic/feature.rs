use geo::{LineString, Polygon};
use geojson::JsonObject;


/// A single polygon (one ring, no holes) together with its feature properties.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonFeature {
    polygon: Polygon,
    properties: JsonObject,
}

impl PolygonFeature {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            properties: JsonObject::new(),
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn ring(&self) -> &LineString {
        self.polygon.exterior()
    }

    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }
}
