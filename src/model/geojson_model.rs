//! GeoJSON shapes written to the output file.
//!
//! Field order in the structs is the key order in the written document.
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCollectionType {
    FeatureCollection,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    Feature,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionType,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub properties: StopProperties,
    pub geometry: Point,
}

impl Feature {
    pub fn new(properties: StopProperties, geometry: Point) -> Self {
        Feature {
            kind: FeatureType::Feature,
            properties,
            geometry,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StopProperties {
    /// The stop gid
    pub number: String,
    /// `"{city} {name}"`
    pub name_with_city: String,
    pub name: String,
    pub city: String,
    /// Fare zones aren't in the stop list. Always empty.
    pub tariff_zone1: String,
    pub tariff_zone2: String,
    pub tariff_zone3: String,
}

impl StopProperties {
    pub fn new(number: String, name: String, city: String) -> Self {
        StopProperties {
            number,
            name_with_city: format!("{city} {name}"),
            name,
            city,
            tariff_zone1: String::new(),
            tariff_zone2: String::new(),
            tariff_zone3: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Point {
    #[serde(rename = "type")]
    pub kind: GeometryType,
    /// `[x, y]` exactly as the source orders them
    pub coordinates: [f64; 2],
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            kind: GeometryType::Point,
            coordinates: [x, y],
        }
    }
}
