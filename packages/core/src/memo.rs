/// Single-slot cache of a derived value, recomputed only when its key changes.
///
/// Owned by one component instance; never shared between instances.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: usize,
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    pub fn is_cached(&self, key: &K) -> bool {
        matches!(&self.slot, Some((cached, _)) if cached == key)
    }

    pub fn get_or_compute(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> &V {
        if !self.is_cached(key) {
            self.slot = None;
        }
        if self.slot.is_none() {
            self.computations += 1;
        }
        let (_, value) = self
            .slot
            .get_or_insert_with(|| (key.clone(), compute(key)));
        value
    }

    /// How many times a value has been computed so far
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

impl<K: PartialEq + Clone, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
