//! Songbook demo
//!
//! Loads the settings, installs logging, and walks a small catalog through
//! construction, tagging, search, and sorting, printing each step.

use {
    serde_json::to_string,
    songbook::{
        SettingsManager, Song, SongIdGenerator,
        error::{ErrorReporter, Result, ResultExt},
        filter_by_keyword, logging, sort_songs,
    },
    tracing::{debug, info},
};

fn main() -> Result<()> {
    let settings_manager = SettingsManager::new().add_context("Failed to load settings")?;
    let settings = settings_manager.get_settings().clone();
    logging::init(&settings)?;
    info!(config = ?settings_manager.get_config_path(), "Settings loaded");

    if let Err(error) = run(&SongIdGenerator::starting_at(settings.first_id)) {
        ErrorReporter::error(&error, "demo");
        return Err(error);
    }
    Ok(())
}

fn run(ids: &SongIdGenerator) -> Result<()> {
    let mut songs = Vec::new();
    for (title, artist, duration_sec, rating) in [
        ("Imagine", "John Lennon", 183, 4),
        ("Clair de Lune", "Claude Debussy", 300, 5),
        ("  ", "Nobody", 10, 3),
        ("Bohemian Rhapsody", "Queen", 354, 5),
        ("Yesterday", "The Beatles", 125, 9),
    ] {
        let song = Song::new_or_invalid(title, artist, duration_sec, rating, ids);
        if song.is_valid() {
            songs.push(song);
        }
    }

    if let Some(imagine) = songs.first_mut() {
        let rejected = apply_tags(imagine, &["classic", "piano", "Piano", "  "]);
        debug!(id = %imagine.id(), rejected, "Tagged song");
        if let Err(error) = imagine.remove_tag("jazz").add_context("Removing tag") {
            ErrorReporter::warn(&error, "demo");
        }
    }

    for song in &songs {
        let encoded = to_string(song).add_context("Encoding song")?;
        debug!(song = %encoded, "Catalogued");
    }

    sort_songs(&mut songs);
    for song in &songs {
        song.print().add_context("Writing song")?;
    }

    let matches = filter_by_keyword(&songs, "PIANO");
    info!(count = matches.len(), "Keyword search for \"PIANO\"");
    for song in matches {
        song.print().add_context("Writing song")?;
    }
    Ok(())
}

/// Adds each tag in turn and returns how many were rejected.
fn apply_tags(song: &mut Song, tags: &[&str]) -> usize {
    tags.iter()
        .filter(|&&tag| {
            song.add_tag(tag)
                .inspect_err(|error| debug!(%error, tag, "Tag rejected"))
                .is_err()
        })
        .count()
}
