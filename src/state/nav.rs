use std::time::Duration;

use crate::content::Anchor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum MenuState {
    #[default]
    Closed,
    Open,
}

/// A scroll to `anchor` that should run once `delay` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor: Anchor,
    pub delay: Duration,
}

impl ScrollRequest {
    /// Finds the target with `lookup` and hands it to `scroll`. A missing target
    /// skips the scroll. Returns whether a scroll happened.
    pub fn run<E>(&self, lookup: impl FnOnce(&str) -> Option<E>, scroll: impl FnOnce(&E)) -> bool {
        let selector = self.anchor.selector();
        match lookup(selector) {
            Some(target) => {
                scroll(&target);
                true
            }
            None => {
                log::debug!("no element for {selector}, skipping scroll");
                false
            }
        }
    }
}

/// Full-screen menu. `close_delay` is how long the close animation runs before
/// a requested scroll starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    state: MenuState,
    close_delay: Duration,
}

impl NavMenu {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: MenuState::Closed,
            close_delay,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        log::debug!("menu {:?}", self.state);
    }

    /// Closes the menu and returns the deferred scroll. Only valid while open.
    pub fn select_destination(&mut self, anchor: Anchor) -> Option<ScrollRequest> {
        if !self.is_open() {
            log::debug!("ignoring destination {} while menu is closed", anchor.selector());
            return None;
        }
        self.state = MenuState::Closed;
        Some(ScrollRequest {
            anchor,
            delay: self.close_delay,
        })
    }

    /// Logo click. Scrolls home from either state, waiting on the close animation
    /// only if there is one.
    pub fn return_home(&mut self) -> ScrollRequest {
        self.select_destination(Anchor::Home)
            .unwrap_or(ScrollRequest {
                anchor: Anchor::Home,
                delay: Duration::ZERO,
            })
    }
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
