use std::fs;
use std::path::{Path, PathBuf};

use engine::collection::FeatureCollection;
use engine::record::FlowDataset;

use crate::country_data::{CountryDataError, countries_from_geojson_str};
use crate::flow_data::{FlowDataError, flows_from_json_str};

#[derive(Debug)]
pub enum DatasetLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Countries(CountryDataError),
    Flows(FlowDataError),
}

impl std::fmt::Display for DatasetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetLoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            DatasetLoadError::Countries(e) => write!(f, "country dataset error: {e}"),
            DatasetLoadError::Flows(e) => write!(f, "flow dataset error: {e}"),
        }
    }
}

impl std::error::Error for DatasetLoadError {}

pub fn load_countries_file(path: impl AsRef<Path>) -> Result<FeatureCollection, DatasetLoadError> {
    let payload = read(path.as_ref())?;
    countries_from_geojson_str(&payload).map_err(DatasetLoadError::Countries)
}

pub fn load_flows_file(path: impl AsRef<Path>) -> Result<FlowDataset, DatasetLoadError> {
    let payload = read(path.as_ref())?;
    flows_from_json_str(&payload).map_err(DatasetLoadError::Flows)
}

fn read(path: &Path) -> Result<String, DatasetLoadError> {
    fs::read_to_string(path).map_err(|e| DatasetLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
