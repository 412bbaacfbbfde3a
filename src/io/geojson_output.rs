use anyhow::Result;
use geojson::{Feature, FeatureCollection, Geometry, Value};

use crate::geodesic::PolygonFeature;


pub fn make_feature_collection(feature: &PolygonFeature) -> FeatureCollection {
    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(feature.polygon()))),
        id: None,
        properties: Some(feature.properties().clone()),
        foreign_members: None,
    };

    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

/// Pretty JSON (2-space indent) of the single-feature collection.
pub fn make_geojson(feature: &PolygonFeature) -> Result<String> {
    Ok(serde_json::to_string_pretty(&make_feature_collection(feature))?)
}


#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::geodesic::circle_to_polygon;

    #[test]
    fn collection_shape() -> Result<()> {
        let feature = circle_to_polygon(Point::new(28.97, 41.01), 50_000.0, Some(15))?;
        let json: serde_json::Value = serde_json::from_str(&make_geojson(&feature)?)?;

        assert_eq!(json["type"], "FeatureCollection");

        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["type"], "Feature");
        assert_eq!(features[0]["geometry"]["type"], "Polygon");
        assert_eq!(features[0]["properties"], serde_json::json!({}));

        let rings = features[0]["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(rings.len(), 1);

        let ring = rings[0].as_array().unwrap();
        assert_eq!(ring.len(), 16);
        assert_eq!(ring.first(), ring.last());

        let first = &feature.ring().0[0];
        assert!((ring[0][0].as_f64().unwrap() - first.x).abs() < 1e-12);
        assert!((ring[0][1].as_f64().unwrap() - first.y).abs() < 1e-12);

        Ok(())
    }

    #[test]
    fn pretty_printed_with_two_spaces() -> Result<()> {
        let feature = circle_to_polygon(Point::new(0.0, 0.0), 1_000.0, Some(3))?;
        let text = make_geojson(&feature)?;

        assert!(text.starts_with("{\n  \""));
        assert!(text.lines().any(|l| l.starts_with("      \"geometry\": {")));

        Ok(())
    }
}
