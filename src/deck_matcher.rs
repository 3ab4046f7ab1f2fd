use tracing::debug;

use crate::catalog;
use crate::models::deck::{Deck, Zone};

// One char in, one char out: no final-sigma rule, no expansions such as `İ` -> `i̇`.
fn fold(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// First zone holding a card whose name contains `folded_term`, scanning main, extra,
/// then side and stopping at the first hit.
fn first_matching_zone(deck: &Deck, folded_term: &str) -> Option<Zone> {
    deck.cards()
        .find(|(_, card)| fold(card).contains(folded_term))
        .map(|(zone, _)| zone)
}

/// Decks with at least one card whose name contains `term`, ignoring case.
///
/// Catalog order is kept and a deck appears at most once. Blank terms are not rejected
/// here: an empty term matches every deck that holds a card.
pub fn decks_containing<'a>(decks: &'a [Deck], term: &str) -> Vec<&'a Deck> {
    let folded_term = fold(term);

    decks
        .iter()
        .filter(|deck| match first_matching_zone(deck, &folded_term) {
            Some(zone) => {
                debug!("Deck {} matches {term:?} in {zone} zone", deck.id);
                true
            }
            None => false,
        })
        .collect()
}

pub fn find_decks_containing(term: &str) -> Vec<&'static Deck> {
    decks_containing(catalog::all_decks(), term)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ids(decks: &[&Deck]) -> Vec<String> {
        decks.iter().map(|d| d.id.clone()).collect()
    }

    fn deck(id: &str, main: &[&str], extra: &[&str], side: &[&str]) -> Deck {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "deck_name": id,
            "deck_archtype": "Test",
            "tournament": "Locals",
            "date": "2026-01-01",
            "placement": "1st Place",
            "player": "Tester",
            "main_cards": main,
            "extra_cards": extra,
            "side_cards": side,
        }))
        .unwrap()
    }

    #[test]
    fn test_case_insensitive() {
        let lower = find_decks_containing("tearlament");
        let upper = find_decks_containing("TEARLAMENT");
        assert_eq!(lower, upper);
        assert_eq!(ids(&lower), vec!["asian_champ_2026"]);
    }

    #[test]
    fn test_substring_match() {
        let found = find_decks_containing("Tearlament Sch");
        assert_eq!(ids(&found), vec!["asian_champ_2026"]);
    }

    #[test]
    fn test_unknown_card_is_empty() {
        assert!(find_decks_containing("Totally Unknown Card Name").is_empty());
    }

    #[test]
    fn test_order_follows_catalog() {
        let found = find_decks_containing("Nibiru, the Primal Being");
        assert_eq!(
            ids(&found),
            vec!["ycs_miami_2026", "asian_champ_2026", "regional_2026_01"]
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            find_decks_containing("Talker"),
            find_decks_containing("Talker")
        );
    }

    #[test]
    fn test_side_zone_only_match() {
        let decks = vec![
            deck("a", &["Card A"], &["Card B"], &["Effect Veiler"]),
            deck("b", &["Card A"], &[], &[]),
        ];
        let found = decks_containing(&decks, "effect veiler");
        assert_eq!(ids(&found), vec!["a"]);
        assert_eq!(first_matching_zone(&decks[0], "effect veiler"), Some(Zone::Side));
    }

    #[test]
    fn test_miami_effect_veiler_is_side_only() {
        let miami = &catalog::all_decks()[0];
        assert_eq!(first_matching_zone(miami, "effect veiler"), Some(Zone::Side));
        assert_eq!(ids(&find_decks_containing("Effect Veiler")).len(), 3);
    }

    #[test]
    fn test_first_zone_wins() {
        let d = deck("a", &["Pot"], &["Pot of Greed"], &["Pot"]);
        assert_eq!(first_matching_zone(&d, "pot"), Some(Zone::Main));
        assert_eq!(first_matching_zone(&d, "greed"), Some(Zone::Extra));
    }

    #[test]
    fn test_deck_matching_many_cards_appears_once() {
        let decks = vec![deck("a", &["Taros", "Rite of Taros"], &["Taros"], &["Taros"])];
        assert_eq!(decks_containing(&decks, "taros").len(), 1);

        let found = find_decks_containing("Swordsoul Strategist Longyuan");
        assert_eq!(ids(&found), vec!["ycs_miami_2026"]);
    }

    #[test]
    fn test_empty_term_matches_every_non_empty_deck() {
        let decks = vec![
            deck("a", &["Card A"], &[], &[]),
            deck("empty", &[], &[], &[]),
            deck("c", &[], &[], &["Card C"]),
        ];
        assert_eq!(ids(&decks_containing(&decks, "")), vec!["a", "c"]);
    }

    #[test]
    fn test_non_ascii_capitals_fold_per_char() {
        assert_eq!(fold("İ"), "i");
        assert_eq!(fold("ΑΣΑ"), "ασα");
        assert_eq!(fold("ΑΣ"), "ασ");

        let decks = vec![deck("greek", &["ΑΣΑ"], &[], &[])];
        assert_eq!(ids(&decks_containing(&decks, "ΑΣ")), vec!["greek"]);
        assert_eq!(ids(&decks_containing(&decks, "σα")), vec!["greek"]);

        assert_eq!(find_decks_containing("İ"), find_decks_containing("i"));
        assert_eq!(find_decks_containing("İ").len(), 3);
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let decks = vec![deck("a", &["Taros"], &[], &[])];
        assert!(decks_containing(&decks, " taros").is_empty());
    }
}
