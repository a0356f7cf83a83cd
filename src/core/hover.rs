/// Which item of an ordered collection has pointer focus.
///
/// At most one index is active. Entering an item always wins, even without a
/// leave on the previous one; leaving only clears when it is the active item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverReveal {
    len: usize,
    active: Option<usize>,
}

impl HoverReveal {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    /// Returns whether the active index changed.
    pub fn enter(&mut self, index: usize) -> bool {
        if index >= self.len || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Returns whether the active index changed.
    pub fn leave(&mut self, index: usize) -> bool {
        if self.active != Some(index) {
            return false;
        }
        self.active = None;
        true
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[inline]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
