use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use snafu::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tunelyrics_client::client::{Client, DEFAULT_CATALOG_URL, DEFAULT_LYRICS_URL};
use tunelyrics_controls::{
    lyrics::{LyricsOutcome, resolve_lyrics},
    notification::Notification,
    pagination::{DEFAULT_PAGE_SIZE, ViewState},
    session::Session,
};
use tunelyrics_models::{SONG_KIND, Track};

const LOAD_MORE: &str = "Load more...";
const NEW_SEARCH: &str = "New search";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, env = "TUNELYRICS_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    /// Base url of the music catalog.
    catalog_url: String,

    #[clap(long, env = "TUNELYRICS_LYRICS_URL", default_value = DEFAULT_LYRICS_URL)]
    /// Base url of the lyrics service.
    lyrics_url: String,

    #[clap(long, env = "TUNELYRICS_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    /// Number of results revealed per page.
    page_size: usize,

    #[clap(short, long)]
    /// Log level. Falls back to RUST_LOG when not set.
    verbosity: Option<tracing::Level>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog for songs
    Search {
        #[clap(required = true)]
        query: Vec<String>,

        #[clap(long, default_value_t = false)]
        /// Print every match instead of the first page.
        all: bool,
    },
    /// Look up the lyrics of a song
    Lyrics {
        #[clap(short, long)]
        artist: String,

        #[clap(short, long)]
        track: String,
    },
    /// Search, page through results and read lyrics interactively
    Browse { query: Vec<String> },
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{error}"))]
    ClientError { error: String },
    #[snafu(display("{error}"))]
    ControlsError { error: String },
    #[snafu(display("{error}"))]
    TerminalError { error: String },
}

impl From<tunelyrics_client::Error> for Error {
    fn from(error: tunelyrics_client::Error) -> Self {
        Error::ClientError {
            error: error.to_string(),
        }
    }
}

impl From<tunelyrics_controls::error::Error> for Error {
    fn from(error: tunelyrics_controls::error::Error) -> Self {
        Error::ControlsError {
            error: error.to_string(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(error: dialoguer::Error) -> Self {
        Error::TerminalError {
            error: error.to_string(),
        }
    }
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    init_logging(cli.verbosity);

    let client = tunelyrics_client::client::new(&cli.catalog_url, &cli.lyrics_url)?;

    match cli.command {
        Commands::Search { query, all } => {
            let session = Session::new(client.clone(), client, cli.page_size);
            search(&session, &query.join(" "), all).await
        }
        Commands::Lyrics { artist, track } => lyrics(&client, artist, track).await,
        Commands::Browse { query } => {
            let session = Session::new(client.clone(), client, cli.page_size);
            browse(&session, query.join(" ")).await
        }
    }
}

fn init_logging(verbosity: Option<tracing::Level>) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    match verbosity {
        Some(level) => subscriber.with_max_level(level).init(),
        None => subscriber
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
    }
}

async fn search(session: &Session<Client, Client>, query: &str, all: bool) -> Result<(), Error> {
    let Some(mut view) = session.search(query).await? else {
        return Ok(());
    };

    if view.is_empty {
        println!("No results");
        return Ok(());
    }

    if all {
        while view.has_more {
            view = session
                .advance_if_at_end(view.visible_items.len() - 1)
                .await;
        }
    }

    for (index, track) in view.visible_items.iter().enumerate() {
        println!("{:>4}. {}", index + 1, track.display_title());
    }

    if view.has_more {
        println!("More results available, rerun with --all to list them.");
    }

    Ok(())
}

async fn lyrics(client: &Client, artist: String, track: String) -> Result<(), Error> {
    let track = Track {
        artist_name: Some(artist),
        track_name: Some(track),
        media_kind: Some(SONG_KIND.to_string()),
        ..Default::default()
    };

    match resolve_lyrics(&track, client).await? {
        LyricsOutcome::Found { lyrics } => {
            print_lyrics(&track, lyrics.as_deref());
            Ok(())
        }
        LyricsOutcome::NotFound { error_message } => Err(Error::ControlsError {
            error: format!("Could not locate lyrics for that song. {error_message}"),
        }),
    }
}

async fn browse(session: &Session<Client, Client>, mut query: String) -> Result<(), Error> {
    let mut notifications = session.notifications();
    tokio::spawn(async move {
        loop {
            match notifications.recv().await {
                Ok(Notification::Error(message)) => eprintln!("Error: {message}"),
                Ok(Notification::Info(message)) => println!("{message}"),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    loop {
        if query.trim().is_empty() {
            query = Input::<String>::new()
                .with_prompt("Search (leave empty to quit)")
                .allow_empty(true)
                .interact_text()?;
        }

        if query.trim().is_empty() {
            return Ok(());
        }

        match session.search(query.trim()).await {
            Ok(Some(view)) => browse_results(session, view).await?,
            Ok(None) => {}
            Err(error) => debug!("search failed: {error}"),
        }

        session.clear().await;
        query.clear();
    }
}

async fn browse_results(
    session: &Session<Client, Client>,
    mut view: ViewState,
) -> Result<(), Error> {
    while !view.is_empty {
        let visible = view.visible_items.len();

        let mut items: Vec<String> = view.visible_items.iter().map(Track::display_title).collect();
        if view.has_more {
            items.push(LOAD_MORE.to_string());
        }
        items.push(NEW_SEARCH.to_string());

        let choice = Select::new()
            .with_prompt(format!("Songs (showing {visible})"))
            .items(&items)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(index) if index < visible => {
                let Some(selection) = session.select(index).await else {
                    continue;
                };

                match session.lyrics_for(&selection).await {
                    Ok(LyricsOutcome::Found { lyrics }) => {
                        print_lyrics(selection.track(), lyrics.as_deref())
                    }
                    Ok(LyricsOutcome::NotFound { .. }) => {}
                    Err(error) => debug!("lyrics lookup failed: {error}"),
                }
            }
            Some(index) if view.has_more && index == visible => {
                view = session.advance_if_at_end(visible - 1).await;
            }
            _ => return Ok(()),
        }
    }

    Ok(())
}

fn print_lyrics(track: &Track, lyrics: Option<&str>) {
    println!("\n{}\n", track.display_title());

    match lyrics {
        Some(lyrics) if !lyrics.trim().is_empty() => println!("{lyrics}\n"),
        _ => println!("(no lyrics text was returned for this song)\n"),
    }
}
