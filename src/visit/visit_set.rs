use fixedbitset::FixedBitSet;

/// A set of visited vertices.
pub trait VisitSet {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, v: usize) -> bool;

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, v: usize) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited vertices to be empty.
    fn reset_visited(&mut self);
}

impl VisitSet for FixedBitSet {
    fn visit(&mut self, v: usize) -> bool {
        if self.len() <= v {
            self.grow(v + 1);
        }
        !self.put(v)
    }

    fn is_visited(&self, v: usize) -> bool {
        self.contains(v)
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_once() {
        let mut visited = FixedBitSet::with_capacity(4);

        assert!(visited.visit(2));
        assert!(!visited.visit(2));
        assert!(visited.is_visited(2));
        assert!(!visited.is_visited(1));
        assert_eq!(visited.visited_count(), 1);
    }

    #[test]
    fn visit_grows() {
        let mut visited = FixedBitSet::new();

        assert!(visited.visit(0));
        assert!(visited.visit(9));
        assert!(visited.is_visited(9));
        assert_eq!(visited.visited_count(), 2);

        visited.reset_visited();
        assert_eq!(visited.visited_count(), 0);
        assert!(!visited.is_visited(0));
    }
}
