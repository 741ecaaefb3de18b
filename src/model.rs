pub mod geojson_model;
pub mod vvo_api_model;
