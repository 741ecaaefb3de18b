//! Fetches the VVO stop list and turns it into a GeoJSON file
use crate::model::{
    geojson_model::{Feature, FeatureCollection, Point, StopProperties},
    vvo_api_model::VvoStop,
};
use anyhow::Context;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use tracing::{Instrument, info, info_span, warn};

pub const VVO_STOPS_URL: &str = "https://www.vvo-online.de/open_data/VVO_STOPS.JSON";
pub const OUTPUT_FILE: &str = "stops.json";

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Error fetching stops")]
    Request(#[from] reqwest::Error),

    #[error("Error parsing stops")]
    Parse(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum SaveError {
    #[error("Error serializing feature collection")]
    Serialize(#[source] serde_json::Error),

    #[error("Error writing {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches the stop list and writes it as a feature collection to `stops.json`
/// in the working directory.
pub async fn run() -> anyhow::Result<()> {
    convert_stops(VVO_STOPS_URL, Path::new(OUTPUT_FILE)).await?;

    Ok(())
}

/// Returns the amount of features written.
///
/// Nothing is written if fetching fails, an existing file stays as it is.
/// Errors are returned, not logged.
#[tracing::instrument]
pub async fn convert_stops(url: &str, output: &Path) -> anyhow::Result<usize> {
    let stops = fetch_stops(url).await.context("Couldn't get the stop list")?;

    let collection = build_feature_collection(&stops);
    let feature_count = collection.features.len();

    save_feature_collection(&collection, output).await?;

    info!(
        "[DONE] Saved {} features to '{}'.",
        feature_count,
        output.display()
    );

    Ok(feature_count)
}

#[tracing::instrument]
pub async fn fetch_stops(url: &str) -> Result<Vec<VvoStop>, NetworkError> {
    let response = reqwest::get(url)
        .instrument(info_span!("Fetching stops"))
        .await?
        .error_for_status()?;

    let stops_string = response
        .text()
        .instrument(info_span!("Reading body of response"))
        .await?;

    let stops: Vec<VvoStop> = serde_json::from_str(&stops_string)?;

    info!("got {} stops", stops.len());

    Ok(stops)
}

/// Skips stops without any coordinates, keeps the order of the rest.
pub fn build_feature_collection(stops: &[VvoStop]) -> FeatureCollection {
    let features = stops.iter().filter_map(build_feature).collect_vec();

    FeatureCollection::new(features)
}

pub fn build_feature(stop: &VvoStop) -> Option<Feature> {
    if !stop.has_coordinates() {
        info!(gid = %stop.gid, "Skipping stop with missing coordinates");
        return None;
    }

    let geometry = Point::new(
        convert_coordinate(&stop.x, stop),
        convert_coordinate(&stop.y, stop),
    );

    let properties = StopProperties::new(stop.gid.clone(), stop.name.clone(), stop.place.clone());

    Some(Feature::new(properties, geometry))
}

/// Falls back to `0.0` for anything that isn't a finite number.
/// `stop` is only used for the warning.
pub fn convert_coordinate(raw: &str, stop: &VvoStop) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            warn!(
                gid = %stop.gid,
                name = %stop.name,
                place = %stop.place,
                "Failed to convert '{}' to float",
                raw
            );
            0.0
        }
    }
}

/// Serializes the whole document before touching the file.
#[tracing::instrument(skip(collection))]
pub async fn save_feature_collection(
    collection: &FeatureCollection,
    path: &Path,
) -> Result<(), SaveError> {
    let json = serde_json::to_vec_pretty(collection).map_err(SaveError::Serialize)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
