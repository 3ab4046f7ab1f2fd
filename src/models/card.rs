use serde::{Deserialize, Serialize};

// Upstream cards are relayed, not owned: every field is optional on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub desc: String,
    pub atk: i32,
    pub def: i32,
    pub level: i32,
    pub rarity: Vec<String>,
    #[serde(rename = "archtype", alias = "archetype")]
    pub archetype: String,
    #[serde(rename = "card_sets")]
    pub sets: Vec<CardSet>,
    #[serde(rename = "card_images")]
    pub images: Vec<CardImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSet {
    pub set_name: String,
    pub set_code: String,
    #[serde(rename = "set_rarity_code")]
    pub rarity_code: String,
    #[serde(rename = "set_rarity")]
    pub rarity_name: String,
    #[serde(rename = "set_price")]
    pub price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardImage {
    pub id: u64,
    pub image_url: String,
}

/// Body of `cardinfo.php`. The upstream answers "no match" with an error object and no
/// `data`, which decodes to an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct CardInfoResponse {
    #[serde(default)]
    pub data: Vec<Card>,
}

/// `archetypes.php` entries, either bare names or `{"archetype_name": ...}` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArchetypeEntry {
    Name(String),
    Named { archetype_name: String },
}

impl ArchetypeEntry {
    pub fn into_name(self) -> String {
        match self {
            ArchetypeEntry::Name(name) => name,
            ArchetypeEntry::Named { archetype_name } => archetype_name,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_spell_card_without_stats() {
        let json = r#"{
            "id": 14558127,
            "name": "Ash Blossom & Joyous Spring",
            "type": "Effect Monster",
            "atk": 0,
            "def": 1800,
            "level": 3,
            "archetype": "Ash",
            "card_images": [
                {"id": 14558127, "image_url": "https://images/14558127.jpg", "image_url_small": "x"}
            ],
            "card_prices": [{"tcgplayer_price": "1.00"}]
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.archetype, "Ash");
        assert_eq!(card.images.len(), 1);
        assert!(card.sets.is_empty());

        let spell: Card = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Called by the Grave",
            "type": "Spell Card"
        }))
        .unwrap();
        assert_eq!(spell.atk, 0);
        assert_eq!(spell.desc, "");
    }

    #[test]
    fn test_card_serializes_relay_names() {
        let card = Card {
            archetype: "Swordsoul".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["archtype"], "Swordsoul");
        assert!(json.get("card_sets").is_some());
        assert!(json.get("type").is_some());
    }

    #[test]
    fn test_no_match_body_is_empty() {
        let body = r#"{"error": "No card matching your query was found in the database."}"#;
        let response: CardInfoResponse = serde_json::from_str(body).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_archetype_entries() {
        let entries: Vec<ArchetypeEntry> =
            serde_json::from_str(r#"[{"archetype_name": "Tearlament"}, "Swordsoul"]"#).unwrap();
        let names = entries.into_iter().map(ArchetypeEntry::into_name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Tearlament", "Swordsoul"]);
    }
}
