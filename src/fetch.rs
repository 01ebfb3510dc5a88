use crate::catalog::{ArtistRef, Catalog, Playlist, Track};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::error::Error;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE: &str = "https://api.spotify.com/v1";
const SEARCH_PAGE_SIZE: usize = 50;
const TRACK_PAGE_SIZE: usize = 100;

pub struct SpotifyClient {
    http: reqwest::blocking::Client,
    access_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    playlists: Option<SearchPage>,
}

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<Option<PlaylistItem>>,
}

#[derive(Deserialize)]
struct PlaylistItem {
    id: Option<String>,
    name: Option<String>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct TracksPage {
    #[serde(default)]
    items: Vec<Option<TrackItem>>,
    next: Option<String>,
}

#[derive(Deserialize)]
struct TrackItem {
    track: Option<TrackObject>,
}

#[derive(Deserialize)]
struct TrackObject {
    id: Option<String>,
    name: Option<String>,
    #[serde(default)]
    artists: Vec<ArtistObject>,
    album: Option<AlbumObject>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct AlbumObject {
    name: Option<String>,
}

#[derive(Deserialize)]
struct ArtistObject {
    id: Option<String>,
    name: Option<String>,
    external_urls: Option<ExternalUrls>,
}

#[derive(Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

struct PlaylistStub {
    id: String,
    name: String,
    url: Option<String>,
}

impl SpotifyClient {
    /// Authenticates with the client-credentials flow using
    /// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let client_id = std::env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| "SPOTIFY_CLIENT_ID is not set")?;
        let client_secret = std::env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| "SPOTIFY_CLIENT_SECRET is not set")?;
        Self::authenticate(&client_id, &client_secret)
    }

    pub fn authenticate(client_id: &str, client_secret: &str) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::new();
        let response: TokenResponse = http
            .post(TOKEN_URL)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(Self {
            http,
            access_token: response.access_token,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, Box<dyn Error>> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response)
    }

    /// Searches for playlists matching the query, paging through results in
    /// blocks of 50 until `limit` playlists are collected or the results run
    /// out. Entries missing an id or name are skipped.
    fn search_playlists(&self, query: &str, limit: usize) -> Result<Vec<PlaylistStub>, Box<dyn Error>> {
        let mut stubs = Vec::new();
        let mut offset = 0;
        while stubs.len() < limit {
            let page_size = SEARCH_PAGE_SIZE.min(limit - stubs.len());
            let url = format!(
                "{}/search?q={}&type=playlist&limit={}&offset={}",
                API_BASE,
                urlencoding::encode(query),
                page_size,
                offset
            );
            let response: SearchResponse = self.get_json(&url)?;
            let Some(page) = response.playlists else {
                eprintln!("⚠️  Unexpected search response, stopping at {} playlists", stubs.len());
                break;
            };
            if page.items.is_empty() {
                break;
            }
            offset += page.items.len();
            for item in page.items.into_iter().flatten() {
                let (Some(id), Some(name)) = (item.id, item.name) else {
                    continue;
                };
                stubs.push(PlaylistStub {
                    id,
                    name,
                    url: item.external_urls.and_then(|urls| urls.spotify),
                });
            }
        }
        stubs.truncate(limit);
        Ok(stubs)
    }

    /// Fetches all tracks of a playlist, following the `next` page URL.
    /// Incomplete track items are skipped.
    fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, Box<dyn Error>> {
        let mut tracks = Vec::new();
        let mut next_url = Some(format!(
            "{}/playlists/{}/tracks?limit={}",
            API_BASE, playlist_id, TRACK_PAGE_SIZE
        ));
        while let Some(url) = next_url {
            let page: TracksPage = self.get_json(&url)?;
            for item in page.items.into_iter().flatten() {
                let Some(track) = item.track else {
                    continue;
                };
                let (Some(id), Some(name)) = (track.id, track.name) else {
                    continue;
                };
                tracks.push(Track {
                    id: Some(id),
                    name: Some(name),
                    album: track.album.and_then(|album| album.name),
                    url: track.external_urls.and_then(|urls| urls.spotify),
                    artists: track
                        .artists
                        .into_iter()
                        .filter(|artist| artist.id.is_some() && artist.name.is_some())
                        .map(|artist| ArtistRef {
                            id: artist.id,
                            name: artist.name,
                            url: artist.external_urls.and_then(|urls| urls.spotify),
                        })
                        .collect(),
                });
            }
            next_url = page.next;
        }
        Ok(tracks)
    }
}

/// Builds a catalog snapshot: playlist search followed by a track fetch per
/// playlist, with a progress bar over the playlists.
pub fn fetch_catalog(
    client: &SpotifyClient,
    query: &str,
    limit: usize,
) -> Result<Catalog, Box<dyn Error>> {
    println!("🔍 Searching playlists for \"{}\"...", query);
    let stubs = client.search_playlists(query, limit)?;
    if stubs.is_empty() {
        return Err(format!("No playlists found for query \"{}\"", query).into());
    }

    let pb = ProgressBar::new(stubs.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} playlists ({eta})",
        )?
        .progress_chars("#>-"),
    );

    let mut playlists = Vec::with_capacity(stubs.len());
    for stub in stubs {
        let tracks = match client.playlist_tracks(&stub.id) {
            Ok(tracks) => tracks,
            Err(error) => {
                pb.println(format!("⚠️  Skipping playlist \"{}\": {}", stub.name, error));
                pb.inc(1);
                continue;
            }
        };
        playlists.push(Playlist {
            id: stub.id,
            name: stub.name,
            url: stub.url,
            tracks,
        });
        pb.inc(1);
    }
    pb.finish_with_message("Fetch complete");

    Ok(Catalog { playlists })
}
