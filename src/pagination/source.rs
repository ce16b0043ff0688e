/// Capability the paginator needs from its backing collection: a cached-able
/// item count plus stable, 0-based random access over a fixed snapshot.
pub trait PageSource {
    type Item;

    /// Number of items visible to this source, after any upstream
    /// filtering/limit/offset has already shaped it.
    fn count(&self) -> usize;

    /// Items at keys `start..=end` in source order. Callers only ask for
    /// ranges inside `0..count()`.
    fn read_range(&self, start: usize, end: usize) -> Vec<Self::Item>;
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn read_range(&self, start: usize, end: usize) -> Vec<T> {
        self[start..=end].to_vec()
    }
}

impl<T: Clone> PageSource for &[T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn read_range(&self, start: usize, end: usize) -> Vec<T> {
        self[start..=end].to_vec()
    }
}

/// Materialized query snapshot. Repositories run their SQL once and hand the
/// rows over; repeated reads then see the same data regardless of what the
/// database does afterwards.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    rows: Vec<T>,
}

impl<T> QueryResult<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: usize) -> Option<&T> {
        self.rows.get(key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T: Clone> PageSource for QueryResult<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.rows.len()
    }

    fn read_range(&self, start: usize, end: usize) -> Vec<T> {
        self.rows[start..=end].to_vec()
    }
}
