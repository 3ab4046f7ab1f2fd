use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The three card groupings of a deck, in the order they are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Zone {
    Main,
    Extra,
    Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    #[serde(rename = "deck_name")]
    pub name: String,
    #[serde(rename = "deck_archtype")]
    pub archetype: String,
    pub tournament: String,
    pub date: NaiveDate,
    pub placement: String,
    pub player: String,
    #[serde(rename = "main_cards", default)]
    main: Vec<String>,
    #[serde(rename = "extra_cards", default)]
    extra: Vec<String>,
    #[serde(rename = "side_cards", default)]
    side: Vec<String>,
}

impl Deck {
    pub fn zone(&self, zone: Zone) -> &[String] {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    /// Every card of the deck paired with its zone, main first, then extra, then side.
    pub fn cards(&self) -> impl Iterator<Item = (Zone, &str)> + '_ {
        Zone::iter().flat_map(move |zone| {
            self.zone(zone)
                .iter()
                .map(move |card| (zone, card.as_str()))
        })
    }

    pub fn card_count(&self) -> usize {
        Zone::iter().map(|zone| self.zone(zone).len()).sum()
    }
}
