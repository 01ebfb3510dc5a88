use std::{error::Error, path::PathBuf};

use crate::catalog::{Playlist, load_catalog};

pub struct ArtistNetApp {
    pub catalog_path: PathBuf,
}

impl ArtistNetApp {
    pub fn new(data_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let catalog_path = if let Some(path) = data_path {
            PathBuf::from(path)
        } else {
            let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
            home_dir.join(".artistnet").join("spotify_data.json")
        };
        Ok(Self { catalog_path })
    }

    pub fn load_playlists(&self) -> Result<Vec<Playlist>, Box<dyn Error>> {
        if !self.catalog_path.exists() {
            return Err(format!(
                "Catalog file not found: {:?}. Run with --fetch \"<query>\" to download one.",
                self.catalog_path
            )
            .into());
        }
        load_catalog(&self.catalog_path)
    }
}
