use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum EntranceTimer {
    #[default]
    Unmounted,
    Pending,
    Fired,
    Cancelled,
}

/// Floating contact pill. Hidden until the entrance delay after mount has
/// elapsed, and hidden again whenever the navigation menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactWidget {
    hovered: bool,
    has_loaded: bool,
    timer: EntranceTimer,
    entrance_delay: Duration,
}

impl ContactWidget {
    pub fn new(entrance_delay: Duration) -> Self {
        Self {
            hovered: false,
            has_loaded: false,
            timer: EntranceTimer::Unmounted,
            entrance_delay,
        }
    }

    /// How long after mount the entrance timer should fire.
    pub fn entrance_delay(&self) -> Duration {
        self.entrance_delay
    }

    /// Returns true if the entrance timer should be started, which is only the
    /// case on the first mount.
    pub fn mount(&mut self) -> bool {
        if self.timer != EntranceTimer::Unmounted {
            return false;
        }
        self.timer = EntranceTimer::Pending;
        true
    }

    /// Timer callback. Ignored unless the timer is still pending.
    pub fn entrance_elapsed(&mut self) {
        if self.timer == EntranceTimer::Pending {
            self.timer = EntranceTimer::Fired;
            self.has_loaded = true;
            log::debug!("contact widget entrance complete");
        }
    }

    pub fn unmount(&mut self) {
        if self.timer == EntranceTimer::Pending {
            self.timer = EntranceTimer::Cancelled;
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_visible(&self, menu_open: bool) -> bool {
        self.has_loaded && !menu_open
    }
}
