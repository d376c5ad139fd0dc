/// Index into a sequence of `len` items, clamped to `[0, len - 1]`.
///
/// The cursor never wraps. With `len == 0` there is no valid index and
/// [`BoundedCursor::index`] returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCursor {
    index: usize,
    len: usize,
}

impl BoundedCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Move one step forward, staying on the last item at the end
    pub fn advance(&mut self) -> Option<usize> {
        if self.index + 1 < self.len {
            self.index += 1;
        }
        self.index()
    }

    /// Move one step back, staying on the first item at the start
    pub fn retreat(&mut self) -> Option<usize> {
        self.index = self.index.saturating_sub(1);
        self.index()
    }
}
