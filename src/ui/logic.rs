//! Business logic (Update/Dispatch)
//!
//! The dispatch loop plus the page behaviors: banner sweeping, search
//! filtering, select-all propagation, count refresh and delete confirmation.

use std::time::Instant;

use super::actions::Action;
use super::state::{App, AppMode, DeletePrompt};
use crate::banner::BannerKind;

impl App {
    /// Core dispatch; returns true when the app should quit
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::ToggleChecked => self.toggle_checked(),
            Action::ToggleSelectAll => self.toggle_select_all(),
            Action::StartSearch => self.mode = AppMode::Searching,
            Action::StartDeleteCard => self.start_delete_card(),
            Action::DismissBanners => self.banners.dismiss_all(),

            Action::Submit => match &self.mode {
                AppMode::Searching => self.mode = AppMode::Normal,
                AppMode::Confirm(_) => self.answer_confirm(Some(true)),
                AppMode::Normal => {}
            },

            Action::Cancel => match &self.mode {
                AppMode::Searching => {
                    self.query.clear();
                    self.apply_filter();
                    self.mode = AppMode::Normal;
                }
                AppMode::Confirm(_) => self.answer_confirm(Some(false)),
                AppMode::Normal => {}
            },

            Action::Input(c) => {
                if self.mode == AppMode::Searching {
                    self.query.push(c);
                    self.apply_filter();
                }
            }

            Action::DeleteChar => {
                if self.mode == AppMode::Searching {
                    self.query.pop();
                    self.apply_filter();
                }
            }
        }
        false
    }

    // ============ navigation ============

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.display_list.len() {
            self.selected_index += 1;
        }
    }

    // ============ search filter ============

    /// Recompute every card's visibility from the current query.
    /// Full rescan on each keystroke, same as the page it replaces.
    pub fn apply_filter(&mut self) {
        self.roster.apply_filter(&self.query);
        self.refresh_display_list();
    }

    // ============ checkbox group ============

    /// Toggle the focused card's own checkbox. Deliberately leaves the
    /// select-all control's state alone: unchecking one member does not
    /// clear select-all.
    pub fn toggle_checked(&mut self) {
        if let Some(id) = self.selected_card_id() {
            if let Some(card) = self.roster.get_mut(&id) {
                card.checked = !card.checked;
            }
            self.refresh_selected_count();
        }
    }

    /// Flip the select-all control and propagate its state to every card
    pub fn toggle_select_all(&mut self) {
        self.select_all = !self.select_all;
        self.set_all_checked(self.select_all);
    }

    pub fn set_all_checked(&mut self, checked: bool) {
        self.roster.set_all_checked(checked);
        self.refresh_selected_count();
    }

    /// Recount checked cards and write the count into the badge.
    /// No badge on this page means nothing to update.
    pub fn refresh_selected_count(&mut self) {
        if let Some(badge) = &mut self.count_badge {
            badge.text = self.roster.checked_count().to_string();
        }
    }

    // ============ delete confirmation ============

    pub fn start_delete_card(&mut self) {
        if let Some(card) = self.selected_card() {
            let message = format!("Remove {} from the roster?", card.full_name());
            self.mode = AppMode::Confirm(DeletePrompt::new(card.id.clone(), Some(message)));
        }
    }

    /// Resolve the pending prompt; anything but an explicit accept aborts
    pub fn answer_confirm(&mut self, choice: Option<bool>) {
        if let AppMode::Confirm(prompt) = &self.mode {
            let target_id = prompt.target_id.clone();
            if DeletePrompt::resolve(choice) {
                if let Some(card) = self.roster.remove(&target_id) {
                    // flash like the page it replaces; banners raised after
                    // startup carry no deadline, so this one stays until
                    // dismissed by hand
                    self.banners
                        .push(format!("{} removed", card.full_name()), BannerKind::Success);
                }
                self.refresh_display_list();
                self.refresh_selected_count();
            }
            self.mode = AppMode::Normal;
        }
    }

    // ============ banners ============

    /// Close expired startup banners; called once per loop turn
    pub fn sweep_banners(&mut self, now: Instant) -> usize {
        self.banners.sweep_expired(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{PlayerCard, Roster};

    fn five_player_app(show_badge: bool) -> App {
        let roster = Roster::sample();
        let config = Config {
            show_selected_count: show_badge,
            ..Config::default()
        };
        App::new(roster, &config, Vec::new())
    }

    fn badge_text(app: &App) -> &str {
        app.count_badge.as_ref().map(|b| b.text.as_str()).unwrap()
    }

    #[test]
    fn test_select_all_checks_everything_and_updates_badge() {
        let mut app = five_player_app(true);
        assert_eq!(badge_text(&app), "0");

        app.dispatch(Action::ToggleSelectAll);
        assert!(app.select_all);
        assert_eq!(app.roster.checked_count(), 5);
        assert_eq!(badge_text(&app), "5");

        app.dispatch(Action::ToggleSelectAll);
        assert!(!app.select_all);
        assert_eq!(app.roster.checked_count(), 0);
        assert_eq!(badge_text(&app), "0");
    }

    #[test]
    fn test_count_refresh_without_badge_is_a_noop() {
        let mut app = five_player_app(false);
        app.dispatch(Action::ToggleSelectAll);
        assert!(app.count_badge.is_none());
        assert_eq!(app.roster.checked_count(), 5);
    }

    #[test]
    fn test_manual_checks_count_but_leave_select_all_alone() {
        let mut app = five_player_app(true);

        app.dispatch(Action::ToggleChecked);
        app.dispatch(Action::MoveSelectionDown);
        app.dispatch(Action::ToggleChecked);

        assert_eq!(badge_text(&app), "2");
        // unchanged even though members were checked by hand
        assert!(!app.select_all);
    }

    #[test]
    fn test_unchecking_one_member_keeps_select_all_set() {
        let mut app = five_player_app(true);
        app.dispatch(Action::ToggleSelectAll);
        assert!(app.select_all);

        app.dispatch(Action::ToggleChecked);
        assert_eq!(badge_text(&app), "4");
        assert!(app.select_all);
    }

    #[test]
    fn test_search_filters_as_typed() {
        let roster = Roster {
            cards: vec![
                PlayerCard::new("Alice", "Smith"),
                PlayerCard::new("Bob", "Jones"),
                PlayerCard::new("alice", "B."),
            ],
        };
        let mut app = App::new(roster, &Config::default(), Vec::new());
        assert_eq!(app.display_list.len(), 3);

        app.dispatch(Action::StartSearch);
        for c in "alice".chars() {
            app.dispatch(Action::Input(c));
        }
        assert_eq!(app.display_list.len(), 2);
        assert_eq!(app.selected_card().unwrap().full_name(), "Alice Smith");

        // Esc cancels the search and restores every card
        app.dispatch(Action::Cancel);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.display_list.len(), 3);
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = five_player_app(true);
        for _ in 0..4 {
            app.dispatch(Action::MoveSelectionDown);
        }
        assert_eq!(app.selected_index, 4);

        app.dispatch(Action::StartSearch);
        app.dispatch(Action::Input('a')); // narrows the list
        assert!(app.selected_index < app.display_list.len());
    }

    #[test]
    fn test_confirmed_delete_removes_card_and_recounts() {
        let mut app = five_player_app(true);
        app.dispatch(Action::ToggleSelectAll);
        let name = app.selected_card().unwrap().full_name();

        app.dispatch(Action::StartDeleteCard);
        match &app.mode {
            AppMode::Confirm(prompt) => {
                assert_eq!(prompt.message(), format!("Remove {name} from the roster?"));
            }
            other => panic!("expected confirm mode, got {other:?}"),
        }

        app.dispatch(Action::Submit);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.roster.len(), 4);
        assert_eq!(badge_text(&app), "4");

        // the removal flash appeared after startup, so no sweep closes it
        assert_eq!(app.banners.open_count(), 1);
        assert_eq!(
            app.sweep_banners(std::time::Instant::now() + std::time::Duration::from_secs(60)),
            0
        );
        assert_eq!(app.banners.open_count(), 1);
    }

    #[test]
    fn test_declined_delete_aborts() {
        let mut app = five_player_app(true);
        app.dispatch(Action::StartDeleteCard);
        app.dispatch(Action::Cancel);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.roster.len(), 5);
    }

    #[test]
    fn test_delete_with_empty_list_is_a_noop() {
        let mut app = App::new(Roster::new(), &Config::default(), Vec::new());
        app.dispatch(Action::StartDeleteCard);
        assert_eq!(app.mode, AppMode::Normal);
    }
}
