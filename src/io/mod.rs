pub mod geojson_output;
pub mod svg_output;
