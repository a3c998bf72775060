use chrono::{DateTime, Local};
use serde::Deserialize;
use uuid::Uuid;

/// One player as stored in roster.toml
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub city: String,
    pub joined_at: DateTime<Local>,
}

/// TOML file structure
#[derive(Debug, Clone, Deserialize)]
pub struct RosterData {
    pub meta: RosterMeta,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterMeta {
    pub version: String,
}

/// One player card on screen
///
/// The filter only toggles `visible`; a hidden card stays in the roster.
/// `checked` belongs to the card's checkbox and is session-local.
#[derive(Debug, Clone)]
pub struct PlayerCard {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub skill_level: String,
    pub city: String,
    pub joined_at: DateTime<Local>,
    pub checked: bool,
    pub visible: bool,
}

impl PlayerCard {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: String::new(),
            email: String::new(),
            skill_level: String::new(),
            city: String::new(),
            joined_at: Local::now(),
            checked: false,
            visible: true,
        }
    }

    pub fn from_record(record: PlayerRecord) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            email: record.email,
            skill_level: record.skill_level,
            city: record.city,
            joined_at: record.joined_at,
            checked: false,
            visible: true,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The card's full visible text, the haystack for the roster filter
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.full_name(),
            self.skill_level,
            self.city,
            self.phone,
            self.email
        )
    }

    pub fn days_member(&self) -> i64 {
        let duration = Local::now() - self.joined_at;
        duration.num_days().max(0)
    }
}

/// Runtime roster (the page's checkbox group)
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub cards: Vec<PlayerCard>,
}

impl Roster {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_data(data: RosterData) -> Self {
        Self {
            cards: data.players.into_iter().map(PlayerCard::from_record).collect(),
        }
    }

    /// Built-in roster used when no roster.toml exists
    pub fn sample() -> Self {
        let seed = [
            ("Alice", "Smith", "3.5", "Lisbon"),
            ("Bob", "Jones", "4.0", "Porto"),
            ("Carla", "Mendes", "3.0", "Faro"),
            ("Diego", "Alves", "4.5", "Lisbon"),
            ("Emma", "Wright", "3.5", "Cascais"),
        ];
        let cards = seed
            .iter()
            .map(|(first, last, skill, city)| {
                let mut card = PlayerCard::new(first, last);
                card.skill_level = skill.to_string();
                card.city = city.to_string();
                card
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlayerCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlayerCard> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Case-insensitive substring match over each card's full text.
    /// Rescans every card on every call; an empty query shows all cards.
    pub fn apply_filter(&mut self, query: &str) {
        let filter = query.to_lowercase();
        for card in &mut self.cards {
            card.visible = card.search_text().to_lowercase().contains(&filter);
        }
    }

    /// Copy the select-all control's state onto every card's checkbox
    pub fn set_all_checked(&mut self, checked: bool) {
        for card in &mut self.cards {
            card.checked = checked;
        }
    }

    pub fn checked_count(&self) -> usize {
        self.cards.iter().filter(|card| card.checked).count()
    }

    pub fn remove(&mut self, id: &str) -> Option<PlayerCard> {
        let pos = self.cards.iter().position(|card| card.id == id)?;
        Some(self.cards.remove(pos))
    }

    /// Ids of the currently visible cards, in roster order
    pub fn visible_ids(&self) -> Vec<String> {
        self.cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_roster(names: &[(&str, &str)]) -> Roster {
        Roster {
            cards: names
                .iter()
                .map(|(first, last)| PlayerCard::new(first, last))
                .collect(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut roster = named_roster(&[("Alice", "Smith"), ("Bob", "Jones"), ("alice", "B.")]);
        roster.apply_filter("alice");

        let visible: Vec<bool> = roster.cards.iter().map(|c| c.visible).collect();
        assert_eq!(visible, vec![true, false, true]);
    }

    #[test]
    fn test_empty_filter_shows_all() {
        let mut roster = named_roster(&[("Alice", "Smith"), ("Bob", "Jones")]);
        roster.apply_filter("zzz");
        assert!(roster.cards.iter().all(|c| !c.visible));

        roster.apply_filter("");
        assert!(roster.cards.iter().all(|c| c.visible));
    }

    #[test]
    fn test_filter_matches_any_card_field() {
        let mut roster = named_roster(&[("Alice", "Smith"), ("Bob", "Jones")]);
        roster.cards[1].city = "Porto".to_string();

        roster.apply_filter("porto");
        assert!(!roster.cards[0].visible);
        assert!(roster.cards[1].visible);
    }

    #[test]
    fn test_filter_hides_without_removing() {
        let mut roster = named_roster(&[("Alice", "Smith"), ("Bob", "Jones")]);
        roster.apply_filter("alice");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.visible_ids().len(), 1);
    }

    #[test]
    fn test_set_all_and_count() {
        let mut roster = Roster::sample();
        assert_eq!(roster.checked_count(), 0);

        roster.set_all_checked(true);
        assert_eq!(roster.checked_count(), 5);

        roster.set_all_checked(false);
        assert_eq!(roster.checked_count(), 0);
    }

    #[test]
    fn test_remove_card() {
        let mut roster = named_roster(&[("Alice", "Smith"), ("Bob", "Jones")]);
        let id = roster.cards[0].id.clone();

        let removed = roster.remove(&id);
        assert_eq!(removed.unwrap().first_name, "Alice");
        assert_eq!(roster.len(), 1);
        assert!(roster.remove(&id).is_none());
    }

    #[test]
    fn test_days_member() {
        use chrono::Duration;

        let mut card = PlayerCard::new("Alice", "Smith");
        assert_eq!(card.days_member(), 0);

        card.joined_at = Local::now() - Duration::days(30);
        assert_eq!(card.days_member(), 30);
    }
}
