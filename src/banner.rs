//! Flash banners with one-shot auto-dismiss
//!
//! Banners present at startup are scheduled for dismissal after a fixed
//! delay; banners pushed later stay until dismissed by hand.

use std::time::Instant;

/// Banner severity, mirrors the flash categories of the pages that feed it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerKind {
    Success,
    Danger,
    Info,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
    deadline: Option<Instant>,
    dismissed: bool,
}

impl Banner {
    fn new(text: String, kind: BannerKind, deadline: Option<Instant>) -> Self {
        Self {
            text,
            kind,
            deadline,
            dismissed: false,
        }
    }

    /// Idempotent: closing a banner that is already gone is a no-op
    pub fn close(&mut self) {
        self.dismissed = true;
    }

    pub fn is_open(&self) -> bool {
        !self.dismissed
    }
}

/// The set of banners currently on the page
#[derive(Debug, Clone, Default)]
pub struct BannerStack {
    banners: Vec<Banner>,
}

impl BannerStack {
    pub fn new() -> Self {
        Self {
            banners: Vec::new(),
        }
    }

    /// Add a startup banner with a one-shot dismiss deadline
    pub fn push_scheduled(&mut self, text: String, kind: BannerKind, deadline: Instant) {
        self.banners.push(Banner::new(text, kind, Some(deadline)));
    }

    /// Add a banner with no deadline; it is never swept automatically
    pub fn push(&mut self, text: String, kind: BannerKind) {
        self.banners.push(Banner::new(text, kind, None));
    }

    /// Close every open banner whose deadline has passed.
    /// Returns how many were closed by this call; a banner already closed
    /// (manually or by an earlier sweep) is skipped, so each banner is
    /// closed at most once over its lifetime.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let mut closed = 0;
        for banner in &mut self.banners {
            if banner.is_open() && banner.deadline.is_some_and(|deadline| now >= deadline) {
                banner.close();
                closed += 1;
            }
        }
        closed
    }

    pub fn dismiss_all(&mut self) {
        for banner in &mut self.banners {
            banner.close();
        }
    }

    pub fn open(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter().filter(|banner| banner.is_open())
    }

    pub fn open_count(&self) -> usize {
        self.open().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sweep_closes_each_scheduled_banner_once() {
        let base = Instant::now();
        let deadline = base + Duration::from_millis(5000);

        let mut stack = BannerStack::new();
        stack.push_scheduled("Player added".to_string(), BannerKind::Success, deadline);
        stack.push_scheduled("Invite sent".to_string(), BannerKind::Info, deadline);

        assert_eq!(stack.sweep_expired(base + Duration::from_millis(4999)), 0);
        assert_eq!(stack.open_count(), 2);

        assert_eq!(stack.sweep_expired(base + Duration::from_millis(5000)), 2);
        assert_eq!(stack.open_count(), 0);

        // second sweep finds nothing left to close
        assert_eq!(stack.sweep_expired(base + Duration::from_millis(9000)), 0);
    }

    #[test]
    fn test_unscheduled_banners_survive_sweeps() {
        let base = Instant::now();
        let mut stack = BannerStack::new();
        stack.push("Roster updated".to_string(), BannerKind::Success);

        assert_eq!(stack.sweep_expired(base + Duration::from_secs(60)), 0);
        assert_eq!(stack.open_count(), 1);
    }

    #[test]
    fn test_manual_dismiss_makes_sweep_a_noop() {
        let base = Instant::now();
        let mut stack = BannerStack::new();
        stack.push_scheduled("Welcome".to_string(), BannerKind::Info, base);

        stack.dismiss_all();
        assert_eq!(stack.open_count(), 0);
        assert_eq!(stack.sweep_expired(base + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut banner = Banner::new("Hi".to_string(), BannerKind::Info, None);
        banner.close();
        banner.close();
        assert!(!banner.is_open());
    }
}
