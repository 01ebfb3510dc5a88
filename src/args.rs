use clap::Parser;

#[derive(Parser)]
#[command(name = "artistnet")]
#[command(about = "Explore artist connections across Spotify playlists")]
pub struct Args {
    /// Path to the catalog JSON file (default: ~/.artistnet/spotify_data.json)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<String>,

    /// Fetch a fresh catalog for this playlist search query before exploring
    #[arg(short, long, value_name = "QUERY")]
    pub fetch: Option<String>,

    /// Maximum number of playlists to fetch
    #[arg(short = 'l', long, value_name = "COUNT", default_value = "200")]
    pub fetch_limit: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
