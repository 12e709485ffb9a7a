use roster_errors::StoreError;
use roster_model::RecordLike;

/// Entries per bucket used to derive `bucket_count` from `max_size`
/// (specification §3: `bucket_count = ((max_size+BUCKET_CAP)/BUCKET_CAP)`
/// rounded down to even).
const BUCKET_CAP: usize = 4;

/// The golden-ratio multiplier used by the hash function
/// `h(k) = (k * MULTIPLIER) mod bucket_count`.
const MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for [`Table::create`].
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Growth threshold: once `count` exceeds this, the next insertion
    /// triggers [`Table::grow`] first.
    pub max_size: usize,
}

fn bucket_count_for(max_size: usize) -> usize {
    let raw = (max_size + BUCKET_CAP) / BUCKET_CAP;
    let even = if raw % 2 == 0 { raw } else { raw - 1 };
    even.max(2)
}

fn bucket_index(key: u64, bucket_count: usize) -> usize {
    (key.wrapping_mul(MULTIPLIER) % bucket_count as u64) as usize
}

/// A mapping `id -> V`, backed by an array of chains (specification §3).
pub struct Table<V: RecordLike> {
    buckets: Vec<Vec<(u64, V)>>,
    count: usize,
    max_size: usize,
}

impl<V: RecordLike> Table<V> {
    /// Creates an empty table. Fails with [`StoreError::InvalidArgument`] if
    /// `config.max_size` is zero.
    pub fn create(config: Config) -> Result<Self, StoreError> {
        if config.max_size == 0 {
            return Err(StoreError::InvalidArgument);
        }
        let bucket_count = bucket_count_for(config.max_size);
        Ok(Table {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            count: 0,
            max_size: config.max_size,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drops every stored value, leaving the table empty with its original
    /// `max_size`/`bucket_count`. Idempotent.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.count = 0;
    }

    /// Inserts `key -> value`. Fails with [`StoreError::InvalidArgument`] if
    /// `key` is zero, with [`StoreError::Duplicate`] if `key` is already
    /// present. Grows the table first if `count` already exceeds
    /// `max_size`.
    pub fn add(&mut self, key: u64, value: V) -> Result<(), StoreError> {
        if key == 0 {
            return Err(StoreError::InvalidArgument);
        }
        if self.get_by_key(key).is_some() {
            return Err(StoreError::Duplicate);
        }
        if self.count > self.max_size {
            self.grow();
        }
        let idx = bucket_index(key, self.buckets.len());
        self.buckets[idx].push((key, value));
        self.count += 1;
        Ok(())
    }

    /// Removes the entry for `key`, dropping its value. Fails with
    /// [`StoreError::NotFound`] if absent.
    pub fn remove(&mut self, key: u64) -> Result<(), StoreError> {
        let idx = bucket_index(key, self.buckets.len());
        let chain = &mut self.buckets[idx];
        let pos = chain.iter().position(|(k, _)| *k == key);
        match pos {
            Some(pos) => {
                chain.remove(pos);
                self.count -= 1;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Merges `patch` into the stored value for `key` via
    /// [`RecordLike::merge_from`]. Fails with [`StoreError::NotFound`] if
    /// absent.
    pub fn modify(&mut self, key: u64, patch: &V) -> Result<(), StoreError> {
        match self.get_by_key_mut(key) {
            Some(existing) => {
                existing.merge_from(patch);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    pub fn get_by_key(&self, key: u64) -> Option<&V> {
        let idx = bucket_index(key, self.buckets.len());
        self.buckets[idx].iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn get_by_key_mut(&mut self, key: u64) -> Option<&mut V> {
        let idx = bucket_index(key, self.buckets.len());
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Returns every stored value matching `predicate`, in bucket-walk
    /// order. `None` matches every value (a full scan).
    pub fn get_by_predicate(&self, predicate: Option<&V::Predicate>) -> Vec<&V> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter())
            .filter(|(_, v)| match predicate {
                Some(p) => v.matches(p),
                None => true,
            })
            .map(|(_, v)| v)
            .collect()
    }

    /// Rebuilds the table at `max_size = floor(old_max_size * 1.5)`,
    /// rehashing every entry without losing or duplicating any of them
    /// (specification §3 invariants).
    fn grow(&mut self) {
        let new_max_size = (self.max_size * 3) / 2;
        let new_bucket_count = bucket_count_for(new_max_size);
        let mut new_buckets: Vec<Vec<(u64, V)>> =
            (0..new_bucket_count).map(|_| Vec::new()).collect();

        for chain in self.buckets.drain(..) {
            for (key, value) in chain {
                let idx = bucket_index(key, new_bucket_count);
                new_buckets[idx].push((key, value));
            }
        }

        self.buckets = new_buckets;
        self.max_size = new_max_size;
    }
}
