//! Binary min-heap keyed by a numeric priority
//!
//! Used as the frontier queue for Dijkstra; entries are never updated in place,
//! stale ones are lazily discarded by the caller.

/// Generic binary min-heap ordered by a `u64` key; ties are broken arbitrarily
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T> {
    heap: Vec<(u64, T)>,
}

impl<T> MinHeap<T> {
    /// Create an empty heap
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Minimum entry without removing it
    pub fn peek(&self) -> Option<(u64, &T)> {
        self.heap.first().map(|(key, value)| (*key, value))
    }

    /// Insert an entry, sifting it up until the heap property holds
    pub fn push(&mut self, key: u64, value: T) {
        self.heap.push((key, value));
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the minimum entry
    pub fn pop(&mut self) -> Option<(u64, T)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let root = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        root
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 >= self.heap[parent].0 {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
