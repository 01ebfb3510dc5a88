use crate::catalog::Playlist;
use crate::colors::ColorScheme;
use crate::graph::{Artist, TrackSummary};

pub fn display_top_connected(results: &[(&Artist, u32)], colors: &ColorScheme) {
    if results.is_empty() {
        println!("{}", colors.error("❌ No connected artists in the catalog."));
        return;
    }
    println!(
        "\n{} Most connected artists (top {}):",
        colors.heading("📊"),
        colors.number(&results.len().to_string())
    );
    for (rank, (artist, strength)) in results.iter().enumerate() {
        println!(
            "{:3} {} - {} connections",
            colors.rank_number(&format!("{}.", rank + 1)),
            colors.artist_name(&artist.name),
            colors.number(&strength.to_string())
        );
    }
}

pub fn display_strongest_pair(pair: Option<(&Artist, &Artist, u32)>, colors: &ColorScheme) {
    match pair {
        Some((first, second, weight)) => {
            println!(
                "\n{} The strongest pair is {} and {} with {} shared playlists.",
                colors.success("🔗"),
                colors.artist_name(&format!("\"{}\"", first.name)),
                colors.artist_name(&format!("\"{}\"", second.name)),
                colors.number(&weight.to_string())
            );
            if let (Some(first_url), Some(second_url)) = (&first.url, &second.url) {
                println!("   {} | {}", colors.url(first_url), colors.url(second_url));
            }
        }
        None => println!("{}", colors.error("❌ The graph is empty, no pairs to report.")),
    }
}

pub fn display_top_tracks(artist_name: &str, tracks: &[TrackSummary], colors: &ColorScheme) {
    if tracks.is_empty() {
        println!(
            "{} {}",
            colors.error("❌ No tracks found for"),
            colors.artist_name(artist_name)
        );
        return;
    }
    println!(
        "\n{} Top tracks for {}:",
        colors.heading("🎵"),
        colors.artist_name(artist_name)
    );
    for (rank, track) in tracks.iter().enumerate() {
        let album = track.album_name.as_deref().unwrap_or("unknown album");
        let mut line = format!(
            "{:3} {} - {}",
            colors.rank_number(&format!("{}.", rank + 1)),
            colors.track_name(&track.track_name),
            colors.album_name(album)
        );
        if let Some(url) = &track.url {
            line.push_str(&format!(" - {}", colors.url(url)));
        }
        println!("{}", line);
    }
}

pub fn display_related_artists(related: &[(&Artist, u32)], colors: &ColorScheme) {
    if related.is_empty() {
        println!("{}", colors.error("❌ No related artists found."));
        return;
    }
    println!("\n{} Top related artists:", colors.heading("🎯"));
    for (rank, (artist, weight)) in related.iter().enumerate() {
        let mut line = format!(
            "{:3} {} - {} co-occurrences",
            colors.rank_number(&format!("{}.", rank + 1)),
            colors.artist_name(&artist.name),
            colors.number(&weight.to_string())
        );
        if let Some(url) = &artist.url {
            line.push_str(&format!(" - {}", colors.url(url)));
        }
        println!("{}", line);
    }
}

pub fn display_shared_playlists(playlists: &[&Playlist], colors: &ColorScheme) {
    if playlists.is_empty() {
        println!("{}", colors.error("❌ No shared playlists found."));
        return;
    }
    println!("\n{} Playlists containing both artists:", colors.heading("📋"));
    for (rank, playlist) in playlists.iter().enumerate() {
        let mut line = format!(
            "{:3} {}",
            colors.rank_number(&format!("{}.", rank + 1)),
            colors.playlist_name(&playlist.name)
        );
        if let Some(url) = &playlist.url {
            line.push_str(&format!(" - {}", colors.url(url)));
        }
        println!("{}", line);
    }
}
