use artistnet::catalog::{ArtistRef, Playlist, Track};
use artistnet::graph::{Artist, ArtistGraph};

fn artist_ref(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
        url: Some(format!("https://open.spotify.com/artist/{}", id)),
    }
}

fn node(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        url: Some(format!("https://open.spotify.com/artist/{}", id)),
    }
}

fn track(name: &str, artists: Vec<ArtistRef>) -> Track {
    Track {
        id: Some(format!("track-{}", name)),
        name: Some(name.to_string()),
        album: Some(format!("{} (album)", name)),
        url: None,
        artists,
    }
}

fn playlist(id: &str, name: &str, tracks: Vec<Track>) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        url: None,
        tracks,
    }
}

#[test]
fn test_playlist_co_occurrence_weights() {
    // P1 = {X: [Alice, Bob]}, P2 = {Y: [Alice, Bob, Carol]}
    let playlists = vec![
        playlist(
            "p1",
            "First",
            vec![track("X", vec![artist_ref("a", "Alice"), artist_ref("b", "Bob")])],
        ),
        playlist(
            "p2",
            "Second",
            vec![track(
                "Y",
                vec![
                    artist_ref("a", "Alice"),
                    artist_ref("b", "Bob"),
                    artist_ref("c", "Carol"),
                ],
            )],
        ),
    ];
    let graph = ArtistGraph::build(playlists);

    let (alice, bob, carol) = (node("a", "Alice"), node("b", "Bob"), node("c", "Carol"));
    assert_eq!(graph.weight(&alice, &bob), Some(2));
    assert_eq!(graph.weight(&alice, &carol), Some(1));
    assert_eq!(graph.weight(&bob, &carol), Some(1));
}

#[test]
fn test_per_playlist_dedup() {
    // Alice appears on two tracks, Bob on one: still only one playlist,
    // so the edge weight must be 1.
    let playlists = vec![playlist(
        "p1",
        "Repeats",
        vec![
            track("X", vec![artist_ref("a", "Alice"), artist_ref("b", "Bob")]),
            track("Y", vec![artist_ref("a", "Alice")]),
        ],
    )];
    let graph = ArtistGraph::build(playlists);

    assert_eq!(graph.weight(&node("a", "Alice"), &node("b", "Bob")), Some(1));
}

#[test]
fn test_symmetry_and_no_self_loops() {
    let playlists = vec![
        playlist(
            "p1",
            "First",
            vec![track(
                "X",
                vec![
                    artist_ref("a", "Alice"),
                    artist_ref("b", "Bob"),
                    artist_ref("c", "Carol"),
                ],
            )],
        ),
        playlist(
            "p2",
            "Second",
            vec![track("Y", vec![artist_ref("b", "Bob"), artist_ref("c", "Carol")])],
        ),
    ];
    let graph = ArtistGraph::build(playlists);

    let artists: Vec<_> = graph.artists().cloned().collect();
    for first in &artists {
        for (neighbor, _) in graph.neighbors(first) {
            assert_ne!(neighbor, first, "self-loop on {}", first.name);
        }
        for second in &artists {
            assert_eq!(
                graph.weight(first, second),
                graph.weight(second, first),
                "asymmetric edge between {} and {}",
                first.name,
                second.name
            );
        }
    }
}

#[test]
fn test_weight_bound() {
    let graph = ArtistGraph::build(vec![
        playlist(
            "p1",
            "First",
            vec![track("X", vec![artist_ref("a", "Alice"), artist_ref("b", "Bob")])],
        ),
        playlist(
            "p2",
            "Second",
            vec![track("Y", vec![artist_ref("a", "Alice"), artist_ref("b", "Bob")])],
        ),
        playlist(
            "p3",
            "Third",
            vec![track("Z", vec![artist_ref("a", "Alice"), artist_ref("c", "Carol")])],
        ),
    ]);

    let artists: Vec<_> = graph.artists().cloned().collect();
    for artist in &artists {
        for (_, weight) in graph.neighbors(artist) {
            assert!(weight >= 1);
            assert!(weight <= graph.playlist_count() as u32);
        }
    }
}

#[test]
fn test_idempotent_rebuild() {
    let make = || {
        vec![
            playlist(
                "p1",
                "First",
                vec![track(
                    "X",
                    vec![
                        artist_ref("a", "Alice"),
                        artist_ref("b", "Bob"),
                        artist_ref("c", "Carol"),
                    ],
                )],
            ),
            playlist(
                "p2",
                "Second",
                vec![track("Y", vec![artist_ref("c", "Carol"), artist_ref("a", "Alice")])],
            ),
        ]
    };
    let first = ArtistGraph::build(make());
    let second = ArtistGraph::build(make());

    let first_nodes: Vec<_> = first.artists().cloned().collect();
    let second_nodes: Vec<_> = second.artists().cloned().collect();
    assert_eq!(first_nodes, second_nodes);

    for a in &first_nodes {
        for b in &first_nodes {
            assert_eq!(first.weight(a, b), second.weight(a, b));
        }
    }
}

#[test]
fn test_solo_artist_never_inserted() {
    let playlists = vec![playlist(
        "p1",
        "Solo",
        vec![track("X", vec![artist_ref("a", "Alice")])],
    )];
    let graph = ArtistGraph::build(playlists);

    assert_eq!(graph.node_count(), 0);
    assert!(graph.find_by_name("Alice").is_none());
}

#[test]
fn test_empty_playlist_contributes_nothing() {
    let playlists = vec![playlist("p1", "Empty", vec![])];
    let graph = ArtistGraph::build(playlists);

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.playlist_count(), 1);
}

#[test]
fn test_malformed_artist_refs_skipped() {
    let missing_id = ArtistRef {
        id: None,
        name: Some("Ghost".to_string()),
        url: None,
    };
    let empty_name = ArtistRef {
        id: Some("x".to_string()),
        name: Some(String::new()),
        url: None,
    };
    let playlists = vec![playlist(
        "p1",
        "Messy",
        vec![track(
            "X",
            vec![
                artist_ref("a", "Alice"),
                missing_id,
                empty_name,
                artist_ref("b", "Bob"),
            ],
        )],
    )];
    let graph = ArtistGraph::build(playlists);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.find_by_name("Ghost").is_none());
    assert_eq!(graph.weight(&node("a", "Alice"), &node("b", "Bob")), Some(1));
}

#[test]
fn test_identity_is_the_full_triple() {
    // Same id with a different name capture yields two distinct nodes.
    let playlists = vec![playlist(
        "p1",
        "Inconsistent",
        vec![track(
            "X",
            vec![
                artist_ref("a", "Alice"),
                artist_ref("a", "alice."),
                artist_ref("b", "Bob"),
            ],
        )],
    )];
    let graph = ArtistGraph::build(playlists);

    assert_eq!(graph.node_count(), 3);
}
