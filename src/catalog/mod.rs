//! Song catalog domain model.
//!
//! This module provides the `Song` record together with its identifier,
//! rating, and text normalization building blocks, plus helpers for sorting
//! and searching collections of songs.

pub mod ids;
pub mod ordering;
pub mod rating;
pub mod song;
pub mod text;

pub use {
    ids::{SongId, SongIdGenerator},
    ordering::{filter_by_keyword, sort_songs},
    rating::Rating,
    song::Song,
};
