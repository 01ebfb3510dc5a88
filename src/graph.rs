use crate::catalog::Playlist;
use rustc_hash::{FxHashMap, FxHashSet};

/// A graph node. Identity is the full (id, name, url) triple: two records
/// sharing an id but differing in name or url are distinct nodes. Inherited
/// from the source data's shape; keying on id alone would merge them and
/// change query results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackSummary {
    pub track_name: String,
    pub album_name: Option<String>,
    pub url: Option<String>,
}

/// Undirected weighted co-occurrence graph over playlist artists.
///
/// An edge (a, b) carries the number of distinct playlists in which both
/// artists appear on at least one track. Weights are symmetric, there are no
/// self-loops, and an artist becomes a node only once it co-occurs with
/// someone. Nodes and neighbor lists keep insertion order, which fixes the
/// iteration order all "first match" and tie-break rules below depend on.
pub struct ArtistGraph {
    playlists: Vec<Playlist>,
    nodes: Vec<Artist>,
    node_index: FxHashMap<Artist, usize>,
    neighbors: Vec<Vec<(usize, u32)>>,
}

/// Mutable construction state, scoped to `ArtistGraph::build` and frozen
/// into the graph when it returns.
struct GraphBuilder {
    nodes: Vec<Artist>,
    node_index: FxHashMap<Artist, usize>,
    neighbors: Vec<Vec<(usize, u32)>>,
}

impl GraphBuilder {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            neighbors: Vec::new(),
        }
    }

    fn add_playlist(&mut self, playlist: &Playlist) {
        let artists = unique_playlist_artists(playlist);
        for i in 0..artists.len() {
            for j in (i + 1)..artists.len() {
                let first = self.intern(&artists[i]);
                let second = self.intern(&artists[j]);
                self.bump_edge(first, second);
                self.bump_edge(second, first);
            }
        }
    }

    fn intern(&mut self, artist: &Artist) -> usize {
        if let Some(&index) = self.node_index.get(artist) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(artist.clone());
        self.node_index.insert(artist.clone(), index);
        self.neighbors.push(Vec::new());
        index
    }

    fn bump_edge(&mut self, from: usize, to: usize) {
        let edges = &mut self.neighbors[from];
        match edges.iter_mut().find(|(neighbor, _)| *neighbor == to) {
            Some((_, weight)) => *weight += 1,
            None => edges.push((to, 1)),
        }
    }
}

/// Artists appearing in the playlist, deduplicated by the full identity
/// triple, in first-encounter order. Refs missing an id or a name are
/// malformed data and are skipped, not errors.
fn unique_playlist_artists(playlist: &Playlist) -> Vec<Artist> {
    let mut seen = FxHashSet::default();
    let mut artists = Vec::new();
    for track in &playlist.tracks {
        for artist_ref in &track.artists {
            let (Some(id), Some(name)) = (&artist_ref.id, &artist_ref.name) else {
                continue;
            };
            if id.is_empty() || name.is_empty() {
                continue;
            }
            let artist = Artist {
                id: id.clone(),
                name: name.clone(),
                url: artist_ref.url.clone(),
            };
            if seen.insert(artist.clone()) {
                artists.push(artist);
            }
        }
    }
    artists
}

impl ArtistGraph {
    /// Builds the full graph from the playlist sequence. A playlist
    /// contributes at most 1 to any edge no matter how many tracks the two
    /// artists share within it. The graph keeps the playlists for the
    /// queries that re-scan them.
    pub fn build(playlists: Vec<Playlist>) -> Self {
        let mut builder = GraphBuilder::new();
        for playlist in &playlists {
            builder.add_playlist(playlist);
        }
        Self {
            playlists,
            nodes: builder.nodes,
            node_index: builder.node_index,
            neighbors: builder.neighbors,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// All nodes, in insertion order.
    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.nodes.iter()
    }

    /// Neighbors of the given artist with edge weights, in insertion order.
    /// Empty if the artist is not a node.
    pub fn neighbors(&self, artist: &Artist) -> Vec<(&Artist, u32)> {
        let Some(&index) = self.node_index.get(artist) else {
            return Vec::new();
        };
        self.neighbors[index]
            .iter()
            .map(|&(neighbor, weight)| (&self.nodes[neighbor], weight))
            .collect()
    }

    /// Weight of the edge between two artists, if both are nodes and linked.
    pub fn weight(&self, first: &Artist, second: &Artist) -> Option<u32> {
        let first_index = *self.node_index.get(first)?;
        let second_index = *self.node_index.get(second)?;
        self.neighbors[first_index]
            .iter()
            .find(|&&(neighbor, _)| neighbor == second_index)
            .map(|&(_, weight)| weight)
    }

    /// The `top_n` artists with the highest connection strength (sum of
    /// incident edge weights), descending. Ties keep insertion order.
    /// Returns all nodes when `top_n` exceeds the node count and nothing
    /// when it is zero; the CLI boundary rejects non-positive input before
    /// it gets here.
    pub fn top_connected(&self, top_n: usize) -> Vec<(&Artist, u32)> {
        let mut connections: Vec<(usize, u32)> = self
            .neighbors
            .iter()
            .enumerate()
            .map(|(index, edges)| (index, edges.iter().map(|&(_, weight)| weight).sum()))
            .collect();
        connections.sort_by(|a, b| b.1.cmp(&a.1));
        connections.truncate(top_n);
        connections
            .into_iter()
            .map(|(index, strength)| (&self.nodes[index], strength))
            .collect()
    }

    /// The pair of artists with the highest co-occurrence weight. Scans
    /// nodes and neighbor lists in insertion order and keeps the first
    /// strict maximum, so ties resolve to the earliest-inserted edge.
    /// `None` on an empty graph.
    pub fn strongest_pair(&self) -> Option<(&Artist, &Artist, u32)> {
        let mut best: Option<(usize, usize, u32)> = None;
        for (index, edges) in self.neighbors.iter().enumerate() {
            for &(neighbor, weight) in edges {
                if best.is_none_or(|(_, _, best_weight)| weight > best_weight) {
                    best = Some((index, neighbor, weight));
                }
            }
        }
        best.map(|(first, second, weight)| (&self.nodes[first], &self.nodes[second], weight))
    }

    /// First node whose name matches case-insensitively, in insertion
    /// order. Matching is on the name field only.
    pub fn find_by_name(&self, artist_name: &str) -> Option<&Artist> {
        let query = artist_name.to_lowercase();
        self.nodes.iter().find(|artist| artist.name.to_lowercase() == query)
    }

    /// Up to `top_n` neighbors of the named artist, sorted by descending
    /// co-occurrence weight, ties in neighbor insertion order. `None` means
    /// the name resolved to no node.
    pub fn related_artists(&self, artist_name: &str, top_n: usize) -> Option<Vec<(&Artist, u32)>> {
        let artist = self.find_by_name(artist_name)?;
        let index = self.node_index[artist];
        let mut related = self.neighbors[index].clone();
        related.sort_by(|a, b| b.1.cmp(&a.1));
        related.truncate(top_n);
        Some(
            related
                .into_iter()
                .map(|(neighbor, weight)| (&self.nodes[neighbor], weight))
                .collect(),
        )
    }

    /// Playlists containing both artist ids, in playlist order, stopping as
    /// soon as `max_playlists` are collected. Membership here is by id
    /// alone, unlike node identity which is the full triple.
    pub fn shared_playlists(
        &self,
        first_id: &str,
        second_id: &str,
        max_playlists: usize,
    ) -> Vec<&Playlist> {
        let mut shared = Vec::new();
        for playlist in &self.playlists {
            if shared.len() >= max_playlists {
                break;
            }
            let mut artist_ids = FxHashSet::default();
            for track in &playlist.tracks {
                for artist_ref in &track.artists {
                    if let Some(id) = artist_ref.id.as_deref() {
                        if !id.is_empty() {
                            artist_ids.insert(id);
                        }
                    }
                }
            }
            if artist_ids.contains(first_id) && artist_ids.contains(second_id) {
                shared.push(playlist);
            }
        }
        shared
    }

    /// The first `top_n` tracks featuring the artist id, in playlist/track
    /// encounter order. A track repeated across playlists is reported each
    /// time it is encountered.
    pub fn top_tracks(&self, artist_id: &str, top_n: usize) -> Vec<TrackSummary> {
        let mut tracks = Vec::new();
        'playlists: for playlist in &self.playlists {
            for track in &playlist.tracks {
                if tracks.len() >= top_n {
                    break 'playlists;
                }
                let featured = track
                    .artists
                    .iter()
                    .any(|artist_ref| artist_ref.id.as_deref() == Some(artist_id));
                if !featured {
                    continue;
                }
                let Some(track_name) = &track.name else {
                    continue;
                };
                tracks.push(TrackSummary {
                    track_name: track_name.clone(),
                    album_name: track.album.clone(),
                    url: track.url.clone(),
                });
            }
        }
        tracks
    }
}
