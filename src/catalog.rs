use serde::{Deserialize, Serialize};
use std::{error::Error, fs::File, io::BufReader, path::Path};

/// The persisted catalog snapshot: an ordered list of playlists under a
/// single top-level key, as written by the fetch step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "playlist_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

// Track fields are all optional: the snapshot may carry partial entries and
// the graph build skips what it cannot use instead of failing the whole load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "track_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// An artist as it appears inside a track record, before any identity
/// filtering happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

pub fn load_catalog(catalog_path: &Path) -> Result<Vec<Playlist>, Box<dyn Error>> {
    let file = File::open(catalog_path)
        .map_err(|e| format!("Could not open catalog file {:?}: {}", catalog_path, e))?;
    let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Could not parse catalog file {:?}: {}", catalog_path, e))?;
    Ok(catalog.playlists)
}

pub fn save_catalog(catalog: &Catalog, catalog_path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = catalog_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(catalog_path)
        .map_err(|e| format!("Could not create catalog file {:?}: {}", catalog_path, e))?;
    serde_json::to_writer_pretty(file, catalog)?;
    Ok(())
}
