//! Fixed tournament data served by the API.
//!
//! Decks and banlists ship inside the binary as JSON resources and are decoded once, on
//! first access. Nothing here is ever mutated, so every request borrows the same
//! `'static` slices.

use lazy_static::lazy_static;

use crate::models::{
    banlist::{Banlist, BanlistFormat},
    deck::Deck,
};

const TOP_DECKS_JSON: &str = include_str!("../resource/top_decks.json");
const BANLISTS_JSON: &str = include_str!("../resource/banlists.json");

lazy_static! {
    static ref TOP_DECKS: Vec<Deck> =
        serde_json::from_str(TOP_DECKS_JSON).expect("embedded top_decks.json is malformed");
    static ref BANLISTS: Vec<Banlist> =
        serde_json::from_str(BANLISTS_JSON).expect("embedded banlists.json is malformed");
}

pub fn all_decks() -> &'static [Deck] {
    &TOP_DECKS
}

pub fn all_banlists() -> &'static [Banlist] {
    &BANLISTS
}

/// Banlists of one format, newest first. `None` keeps every format.
pub fn banlists_for(format: Option<BanlistFormat>) -> Vec<&'static Banlist> {
    all_banlists()
        .iter()
        .filter(|banlist| format.map_or(true, |format| banlist.format == format))
        .collect()
}
