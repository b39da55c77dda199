/// One item of the carousel together with its presentation markers.
#[derive(Debug, Clone)]
pub struct Slide<T> {
    pub item: T,
    active: bool,
}

impl<T> Slide<T> {
    pub fn new(item: T) -> Self {
        Self { item, active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accessibility marker: every slide but the active one is hidden.
    pub fn aria_hidden(&self) -> bool {
        !self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Indicator dot. Its position in the carousel is the item it selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicator {
    active: bool,
}

impl Indicator {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn aria_current(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
