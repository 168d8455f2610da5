//! Navigation bar state: mobile menu, scroll flag, mount entrance.
//!
//! Scroll positions are pushed in by whoever owns the window listener; this type
//! never reaches for a global. Every field is last-write-wins.

/// Scroll offset, in pixels, past which the bar gets its solid background.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
    mounted: bool,
    scroll_threshold_px: f64,
}

impl NavState {
    pub fn new(scroll_threshold_px: f64) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            mounted: false,
            scroll_threshold_px,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record a new vertical scroll offset. Returns `true` if the flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scroll_threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn bar_class(&self) -> &'static str {
        if self.scrolled {
            "fixed w-full z-50 transition-all duration-500 bg-slate-900/95 backdrop-blur-sm shadow-lg"
        } else {
            "fixed w-full z-50 transition-all duration-500 bg-transparent"
        }
    }

    pub fn brand_class(&self) -> &'static str {
        if self.mounted {
            "flex items-center space-x-2 transition-all duration-500 opacity-100 translate-x-0"
        } else {
            "flex items-center space-x-2 transition-all duration-500 opacity-0 -translate-x-10"
        }
    }

    pub fn links_class(&self) -> &'static str {
        if self.mounted {
            "hidden md:flex space-x-8 transition-all duration-700 delay-200 opacity-100"
        } else {
            "hidden md:flex space-x-8 transition-all duration-700 delay-200 opacity-0"
        }
    }

    pub fn actions_class(&self) -> &'static str {
        if self.mounted {
            "hidden md:flex space-x-4 transition-all duration-700 delay-300 opacity-100 translate-x-0"
        } else {
            "hidden md:flex space-x-4 transition-all duration-700 delay-300 opacity-0 translate-x-10"
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}
