// src/noyau/pile.rs
//
// Pile LIFO générique (opérandes entiers / jetons opérateurs).
// Vec dessous : push/pop/peek en O(1) amorti.

#[derive(Clone, Debug)]
pub struct Pile<T> {
    items: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Sommet sans dépiler.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
