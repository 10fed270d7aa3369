//! Pure conversions from raw Web API payloads to the flat records we render.
//!
//! Truncation happens before positions are assigned, so positions always run
//! `1..=n` over the kept items in their original order.

use crate::types::{
    Album, Artist, Entities, NamedRef, RawAlbum, RawArtist, RawTrack, SearchResponse, SearchType,
    Track,
};

pub fn track(raw: RawTrack, position: usize) -> Track {
    let total_seconds = raw.duration_ms / 1000;
    Track {
        name: raw.name,
        artist: names(raw.artists),
        album: raw.album.name,
        release_date: raw.album.release_date,
        minutes: total_seconds / 60,
        seconds: total_seconds % 60,
        id: raw.id.unwrap_or_default(),
        position,
    }
}

pub fn artist(raw: RawArtist, position: usize) -> Artist {
    Artist {
        name: raw.name,
        genres: raw.genres,
        followers: raw.followers.total.unwrap_or_default(),
        id: raw.id.unwrap_or_default(),
        position,
    }
}

pub fn album(raw: RawAlbum, position: usize) -> Album {
    Album {
        name: raw.name,
        artists: names(raw.artists),
        album_type: raw.album_type,
        date: raw.release_date,
        number_of_tracks: raw.total_tracks,
        position,
    }
}

/// Keeps at most `limit` items and numbers them from 1.
pub fn ranked<R, T>(items: Vec<R>, limit: Option<usize>, convert: fn(R, usize) -> T) -> Vec<T> {
    items
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, item)| convert(item, index + 1))
        .collect()
}

/// Normalizes the section of a search response matching `kind`, capped at
/// the preview limit of that kind. A missing section is an empty result.
pub fn search_results(response: SearchResponse, kind: SearchType) -> Entities {
    let limit = Some(kind.preview_limit());
    match kind {
        SearchType::Track => Entities::Tracks(ranked(
            response.tracks.map(|p| p.items).unwrap_or_default(),
            limit,
            track,
        )),
        SearchType::Artist => Entities::Artists(ranked(
            response.artists.map(|p| p.items).unwrap_or_default(),
            limit,
            artist,
        )),
        SearchType::Album => Entities::Albums(ranked(
            response.albums.map(|p| p.items).unwrap_or_default(),
            limit,
            album,
        )),
    }
}

fn names(refs: Vec<NamedRef>) -> Vec<String> {
    refs.into_iter().map(|r| r.name).collect()
}
