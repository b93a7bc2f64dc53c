//! Subcommand handlers

use crate::cli::Command;
use crate::settings::Settings;
use jokes::error::FETCH_FAILED_FALLBACK;
use jokes::{
    AppError, AppResult, CollectionView, ErrorKind, HttpJokeSource, Joke, JokeId, JokeSession,
    JokeType, KvJokeRepository, OptionExt, SessionState, SortOption, StorageGateway,
    TypingTimings,
};
use platform::kv_store::FileStore;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

type Gateway = StorageGateway<KvJokeRepository<FileStore>>;

pub async fn run(command: Command, settings: &Settings) -> AppResult<()> {
    match command {
        Command::Fetch {
            joke_type,
            reveal,
            save,
        } => fetch(settings, joke_type.into(), reveal, save).await,
        Command::List {
            search,
            min_rating,
            sort,
            page,
            per_page,
        } => list(settings, &search, min_rating, &sort, page, per_page),
        Command::Rate { id, stars } => rate(settings, &id, stars),
        Command::Remove { id } => remove(settings, &id),
    }
}

fn gateway(settings: &Settings) -> Gateway {
    let store = FileStore::new(&settings.data_dir);
    let repo = KvJokeRepository::new(store, settings.jokes.storage_key.clone());
    StorageGateway::new(Arc::new(repo))
}

fn parse_id(raw: &str) -> AppResult<JokeId> {
    JokeId::parse(raw).ok_or_app_err(
        ErrorKind::InvalidInput,
        format!("{raw:?} is not a joke id (expected joke_<number>)"),
    )
}

async fn fetch(settings: &Settings, joke_type: JokeType, reveal: bool, save: bool) -> AppResult<()> {
    let mut config = settings.jokes.clone();
    if !io::stdout().is_terminal() {
        config.typing = TypingTimings::instant();
    }

    let source = HttpJokeSource::new(&config)?;
    let mut session = JokeSession::new(
        Arc::new(source),
        Arc::new(gateway(settings)),
        Arc::new(config),
    );
    session.set_joke_type(joke_type);

    if session.fetch().await == SessionState::Error {
        let message = session.error().unwrap_or(FETCH_FAILED_FALLBACK).to_string();
        return Err(AppError::fetch_failure(message));
    }

    let Some(joke) = session.joke() else {
        return Err(AppError::empty_response(FETCH_FAILED_FALLBACK));
    };
    println!("{}", joke.setup);

    if reveal && session.reveal() {
        let mut stdout = io::stdout();
        let mut printed = 0;
        session
            .animate_reveal(|text| {
                let _ = write!(stdout, "{}", &text[printed..]);
                let _ = stdout.flush();
                printed = text.len();
            })
            .await;
        println!();
    }

    if save {
        if let Some(outcome) = session.save() {
            println!("{}", outcome.message);
        }
    }

    Ok(())
}

fn list(
    settings: &Settings,
    search: &str,
    min_rating: u8,
    sort: &str,
    page: usize,
    per_page: Option<usize>,
) -> AppResult<()> {
    let mut config = settings.jokes.clone();
    if let Some(per_page) = per_page {
        config.items_per_page = per_page;
    }

    let saved = gateway(settings).get_all();
    if saved.is_empty() {
        println!("No saved jokes yet.");
        return Ok(());
    }

    let mut view = CollectionView::from_config(&config);
    view.refresh(saved);
    view.set_search_query(search);
    view.set_min_rating(min_rating);
    view.set_sort_option(SortOption::from_code(sort));

    if view.filtered_jokes().is_empty() {
        println!("No jokes match the current filters.");
        return Ok(());
    }

    let total = view.pagination().total_pages();
    view.pagination_mut()
        .go_to_page(page)
        .then_some(())
        .ok_or_app_err(
            ErrorKind::InvalidInput,
            format!("Page {page} is out of range (1-{total})"),
        )?;

    for joke in view.page() {
        print_joke(joke);
    }

    let current = view.pagination().current_page();
    let window: Vec<String> = view
        .visible_page_numbers()
        .into_iter()
        .map(|n| {
            if n == current {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();
    println!(
        "Page {current} of {total} ({} jokes):  {}",
        view.filtered_jokes().len(),
        window.join(" ")
    );

    Ok(())
}

fn print_joke(joke: &Joke) {
    println!("{}  {}  [{}]", joke.id, joke.rating, joke.joke_type);
    println!("    {}", joke.setup);
    println!("    {}", joke.punchline);
}

fn rate(settings: &Settings, raw_id: &str, stars: u8) -> AppResult<()> {
    let id = parse_id(raw_id)?;
    let joke = gateway(settings).rate(&id, stars)?;
    println!("{}  {}", joke.id, joke.rating);
    Ok(())
}

fn remove(settings: &Settings, raw_id: &str) -> AppResult<()> {
    let id = parse_id(raw_id)?;
    let joke = gateway(settings).remove(&id)?;
    println!("Removed: {}", joke.setup);
    Ok(())
}
