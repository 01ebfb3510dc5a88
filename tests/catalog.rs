use artistnet::catalog::{Catalog, Playlist, Track, load_catalog, save_catalog};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_catalog_valid() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "playlists": [
                {{
                    "playlist_id": "p1",
                    "name": "Hits",
                    "url": "https://open.spotify.com/playlist/p1",
                    "tracks": [
                        {{
                            "track_id": "t1",
                            "name": "Song",
                            "album": "Album",
                            "url": "https://open.spotify.com/track/t1",
                            "artists": [
                                {{"id": "a1", "name": "Alice", "url": null}}
                            ]
                        }}
                    ]
                }}
            ]
        }}"#
    )
    .unwrap();

    let playlists = load_catalog(file.path()).unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].id, "p1");
    assert_eq!(playlists[0].name, "Hits");
    assert_eq!(playlists[0].tracks.len(), 1);

    let track = &playlists[0].tracks[0];
    assert_eq!(track.name.as_deref(), Some("Song"));
    assert_eq!(track.album.as_deref(), Some("Album"));
    assert_eq!(track.artists[0].name.as_deref(), Some("Alice"));
    assert!(track.artists[0].url.is_none());
}

#[test]
fn test_load_catalog_tolerates_missing_optional_fields() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "playlists": [
                {{"playlist_id": "p1", "name": "Bare"}},
                {{
                    "playlist_id": "p2",
                    "name": "Sparse tracks",
                    "tracks": [{{"name": "Unattributed"}}, {{}}]
                }}
            ]
        }}"#
    )
    .unwrap();

    let playlists = load_catalog(file.path()).unwrap();
    assert_eq!(playlists.len(), 2);
    assert!(playlists[0].url.is_none());
    assert!(playlists[0].tracks.is_empty());

    let sparse = &playlists[1];
    assert_eq!(sparse.tracks.len(), 2);
    assert!(sparse.tracks[0].album.is_none());
    assert!(sparse.tracks[0].artists.is_empty());
    assert!(sparse.tracks[1].name.is_none());
}

#[test]
fn test_load_catalog_missing_file() {
    let result = load_catalog(std::path::Path::new("/nonexistent/spotify_data.json"));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Could not open"));
}

#[test]
fn test_load_catalog_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let result = load_catalog(file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Could not parse"));
}

#[test]
fn test_save_catalog_then_load() {
    let file = NamedTempFile::new().unwrap();
    let catalog = Catalog {
        playlists: vec![Playlist {
            id: "p1".to_string(),
            name: "Saved".to_string(),
            url: None,
            tracks: vec![Track {
                id: Some("t1".to_string()),
                name: Some("Song".to_string()),
                album: None,
                url: None,
                artists: vec![],
            }],
        }],
    };

    save_catalog(&catalog, file.path()).unwrap();

    let playlists = load_catalog(file.path()).unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].id, "p1");
    assert_eq!(playlists[0].tracks[0].id.as_deref(), Some("t1"));
}
