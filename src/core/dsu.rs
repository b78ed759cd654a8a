//! Disjoint-set (union-find) with path compression and union by rank
//!
//! Near-constant amortized cost per operation; used by the Kruskal engine to
//! detect cycles.

/// Disjoint-set forest over the elements `0..size`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create `size` singleton sets
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`, compressing the walked path
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every visited node directly at the root
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`; returns false if already merged
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_their_own_roots() {
        let mut dsu = DisjointSet::new(4);
        for i in 0..4 {
            assert_eq!(dsu.find(i), i);
        }
    }

    #[test]
    fn test_union_merges_sets() {
        let mut dsu = DisjointSet::new(5);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(2, 3));
        assert_eq!(dsu.find(0), dsu.find(1));
        assert_eq!(dsu.find(2), dsu.find(3));
        assert_ne!(dsu.find(0), dsu.find(2));

        assert!(dsu.union(1, 3));
        assert_eq!(dsu.find(0), dsu.find(2));
        assert_ne!(dsu.find(0), dsu.find(4));
    }

    #[test]
    fn test_union_of_same_set_is_noop() {
        let mut dsu = DisjointSet::new(3);
        assert!(dsu.union(0, 1));
        assert!(!dsu.union(0, 1));
        assert!(!dsu.union(1, 0));
    }

    #[test]
    fn test_path_compression_on_long_chain() {
        let n = 1000;
        let mut dsu = DisjointSet::new(n);
        for i in 1..n {
            dsu.union(i - 1, i);
        }
        let root = dsu.find(0);
        for i in 0..n {
            assert_eq!(dsu.find(i), root);
        }
    }
}
