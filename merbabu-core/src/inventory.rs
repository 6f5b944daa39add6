/// Append-only, insertion-ordered store. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory<T> {
    items: Vec<T>,
}

impl<T> Default for Inventory<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Inventory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Read-only view of every entry, in the order they were added.
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
