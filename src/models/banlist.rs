use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum BanlistFormat {
    #[strum(serialize = "TCG")]
    #[serde(rename = "TCG")]
    Tcg,
    #[strum(serialize = "OCG")]
    #[serde(rename = "OCG")]
    Ocg,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banlist {
    pub banlist_name: String,
    pub banlist_date: NaiveDate,
    #[serde(skip_serializing)]
    pub format: BanlistFormat,
    #[serde(rename = "banned_cards", default)]
    pub cards: Vec<BannedCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannedCard {
    pub card_name: String,
    pub card_id: u32,
    pub ban_status: String,
    #[serde(default, with = "blank_date")]
    pub ban_ocg_date: Option<NaiveDate>,
    #[serde(default, with = "blank_date")]
    pub ban_tcg_date: Option<NaiveDate>,
}

// Dates that don't apply to a format go over the wire as "".
mod blank_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.collect_str(&date.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(None);
        }

        NaiveDate::parse_from_str(&s, FORMAT)
            .map(Some)
            .map_err(de::Error::custom)
    }
}
