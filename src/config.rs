use std::path::PathBuf;

use serde::Deserialize;

fn default_radius_scale() -> f64 {
    10_000.0
}

fn default_enabled() -> bool {
    true
}

fn default_zoom() -> u8 {
    5
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CircleStyle {
    pub stroke_color: String,
    pub stroke_opacity: f64,
    pub stroke_weight: f64,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#ff1727".to_string(),
            stroke_opacity: 0.8,
            stroke_weight: 2.0,
            fill_color: "#ff1727".to_string(),
            fill_opacity: 0.15,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlaceConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Deserialize)]
pub struct GazetteerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub query_limit: Option<usize>,
    #[serde(default)]
    pub places: Vec<PlaceConfig>,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            query_limit: None,
            places: vec![],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RequestConfig {
    pub address: String,
    /// Slider value, scaled by `radius_scale` into meters.
    pub radius: u32,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub outdir: PathBuf,
    #[serde(default)]
    pub segments: Option<usize>,
    #[serde(default = "default_radius_scale")]
    pub radius_scale: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default)]
    pub circle_style: CircleStyle,
    #[serde(default)]
    pub gazetteer: GazetteerConfig,
    pub requests: Vec<RequestConfig>,
}
