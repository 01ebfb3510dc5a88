use artistnet::app::ArtistNetApp;
use artistnet::catalog::save_catalog;
use artistnet::display::{
    display_related_artists, display_shared_playlists, display_strongest_pair,
    display_top_connected, display_top_tracks,
};
use artistnet::fetch::{SpotifyClient, fetch_catalog};
use artistnet::prompt::{read_nonempty_line, read_positive_count, read_yes_no};
use artistnet::{Args, Artist, ArtistGraph, ColorScheme};
use clap::Parser;
use std::error::Error;
use std::io::{self, BufRead, Write};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = ArtistNetApp::new(args.data)?;

    if let Some(query) = &args.fetch {
        let client = SpotifyClient::from_env()?;
        let catalog = fetch_catalog(&client, query, args.fetch_limit)?;
        save_catalog(&catalog, &app.catalog_path)?;
        println!(
            "{} Catalog saved to {:?}",
            colors.success("✅"),
            app.catalog_path
        );
    }

    let playlists = app.load_playlists()?;
    println!(
        "📦 Loaded {} playlists from {:?}",
        colors.number(&playlists.len().to_string()),
        app.catalog_path
    );

    let graph = ArtistGraph::build(playlists);
    println!(
        "🕸️  Built co-occurrence graph with {} artists",
        colors.number(&graph.node_count().to_string())
    );

    println!("\n🎵 Welcome to the Spotify Artist Network!");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    explore(&graph, &mut input, &mut output, colors)?;
    Ok(())
}

fn explore(
    graph: &ArtistGraph,
    input: &mut impl BufRead,
    output: &mut impl Write,
    colors: &ColorScheme,
) -> io::Result<()> {
    loop {
        let top_n = read_positive_count(
            input,
            output,
            "\nHow many of the most connected artists do you want to see? ",
        )?;
        display_top_connected(&graph.top_connected(top_n), colors);

        if read_yes_no(
            input,
            output,
            "\nShow the pair of artists with the highest co-occurrence? (yes/no) ",
        )? {
            display_strongest_pair(graph.strongest_pair(), colors);
        }

        let artist = prompt_known_artist(
            graph,
            input,
            output,
            "\nEnter an artist name to explore their tracks: ",
            colors,
        )?;
        display_top_tracks(&artist.name, &graph.top_tracks(&artist.id, 3), colors);

        let show_related = read_yes_no(
            input,
            output,
            &format!(
                "\nShow 3 artists that co-occur with {}? (yes/no) ",
                colors.artist_name(&artist.name)
            ),
        )?;
        if show_related {
            match graph.related_artists(&artist.name, 3) {
                Some(related) if !related.is_empty() => {
                    display_related_artists(&related, colors);
                    let other = prompt_known_artist(
                        graph,
                        input,
                        output,
                        "\nChoose a related artist to see shared playlists: ",
                        colors,
                    )?;
                    display_shared_playlists(
                        &graph.shared_playlists(&artist.id, &other.id, 3),
                        colors,
                    );
                }
                _ => println!("{}", colors.error("❌ No related artists found.")),
            }
        }

        if !read_yes_no(input, output, "\nExplore another artist? (yes/no) ")? {
            println!("\n👋 Goodbye! Thanks for exploring the artist network.");
            return Ok(());
        }
    }
}

fn prompt_known_artist(
    graph: &ArtistGraph,
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    colors: &ColorScheme,
) -> io::Result<Artist> {
    loop {
        let name = read_nonempty_line(input, output, question)?;
        match graph.find_by_name(&name) {
            Some(artist) => return Ok(artist.clone()),
            None => println!(
                "{} {} {}",
                colors.error("❌ Artist"),
                colors.artist_name(&format!("'{}'", name)),
                colors.error("not found. Please try again.")
            ),
        }
    }
}
