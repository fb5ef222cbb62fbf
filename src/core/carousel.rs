//! Projects carousel pagination

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.len
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.current += 1;
        }
    }

    /// Jump to `index`, clamped to the last slide
    pub fn scroll_to(&mut self, index: usize) {
        self.current = index.min(self.len.saturating_sub(1));
    }

    /// Horizontal track offset in percent of one slide
    pub fn track_offset_percent(&self) -> f64 {
        -(self.current as f64) * 100.0
    }
}
