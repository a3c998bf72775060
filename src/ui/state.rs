//! App state (Model)

use std::time::{Duration, Instant};

use crate::banner::{BannerKind, BannerStack};
use crate::config::Config;
use crate::models::{PlayerCard, Roster};

/// Application state
pub struct App {
    pub roster: Roster,
    pub banners: BannerStack,
    /// Absent on pages without the badge; count updates are then a no-op
    pub count_badge: Option<CountBadge>,
    /// The select-all control's own checkbox state
    pub select_all: bool,
    pub query: String,
    pub selected_index: usize,
    pub display_list: Vec<String>, // visible card ids
    pub mode: AppMode,
}

/// The selected-count display element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountBadge {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Searching,
    Confirm(DeletePrompt),
}

/// A pending delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct DeletePrompt {
    pub target_id: String,
    message: Option<String>,
}

impl DeletePrompt {
    pub const DEFAULT_MESSAGE: &'static str = "Are you sure you want to delete this?";

    pub fn new(target_id: String, message: Option<String>) -> Self {
        Self { target_id, message }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }

    /// Outcome of the prompt. `None` means the host could not ask at all,
    /// which counts as a decline.
    pub fn resolve(choice: Option<bool>) -> bool {
        choice.unwrap_or(false)
    }
}

impl App {
    /// Create the app; `notices` are the startup banners, each scheduled
    /// for auto-dismissal after the configured timeout. Banners pushed
    /// after this point are never auto-dismissed.
    pub fn new(roster: Roster, config: &Config, notices: Vec<(String, BannerKind)>) -> Self {
        let mut banners = BannerStack::new();
        let deadline = Instant::now() + Duration::from_millis(config.banner_timeout_ms);
        for (text, kind) in notices {
            banners.push_scheduled(text, kind, deadline);
        }

        let mut app = Self {
            roster,
            banners,
            count_badge: config.show_selected_count.then(CountBadge::default),
            select_all: false,
            query: String::new(),
            selected_index: 0,
            display_list: Vec::new(),
            mode: AppMode::Normal,
        };
        app.refresh_display_list();
        app.refresh_selected_count();
        app
    }

    /// Rebuild the list of visible cards and keep the selection in range
    pub fn refresh_display_list(&mut self) {
        self.display_list = self.roster.visible_ids();

        if self.display_list.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.display_list.len() {
            self.selected_index = self.display_list.len() - 1;
        }
    }

    pub fn selected_card(&self) -> Option<&PlayerCard> {
        self.display_list
            .get(self.selected_index)
            .and_then(|id| self.roster.get(id))
    }

    pub fn selected_card_id(&self) -> Option<String> {
        self.display_list.get(self.selected_index).cloned()
    }
}
