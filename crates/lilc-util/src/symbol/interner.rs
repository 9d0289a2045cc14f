//! String interner implementation using DashMap for concurrent access.
//!
//! Two sharded maps are kept in sync: string → index for interning and
//! index → string for resolution. Strings are allocated once and leaked to
//! obtain `'static` lifetime; entries are never removed.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use ahash::RandomState;
use dashmap::DashMap;

/// Global string table instance.
///
/// Initialized on first use; all language keywords are pre-interned so they
/// occupy stable low indices.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.seed_keywords();
    table
});

/// Keywords and primitive type names seeded into the table at startup.
const SEED_SYMBOLS: &[&str] = &[
    "if", "else", "while", "for", "let", "fn", "return", "break", "continue",
    "int", "float", "string", "bool", "_", "main",
];

/// Thread-safe string table.
pub struct StringTable {
    /// Maps interned text to its index.
    indices: DashMap<&'static str, u32, RandomState>,

    /// Maps index back to the interned text.
    strings: DashMap<u32, &'static str, RandomState>,

    /// Next free index.
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            indices: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            strings: DashMap::with_capacity_and_hasher(256, RandomState::new()),
            next_index: AtomicU32::new(0),
        }
    }

    fn seed_keywords(&self) {
        for kw in SEED_SYMBOLS {
            self.intern(kw);
        }
    }

    /// Interns a string, returning its index.
    ///
    /// Lock-free on the hit path. On a racing miss both threads may leak a
    /// copy, but exactly one index wins and is returned by both.
    pub fn intern(&self, string: &str) -> u32 {
        if let Some(existing) = self.indices.get(string) {
            return *existing;
        }

        let leaked: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let entry = self.indices.entry(leaked).or_insert_with(|| {
            self.next_index.fetch_add(1, Ordering::Relaxed)
        });
        let index = *entry;
        drop(entry);
        self.strings.entry(index).or_insert(leaked);
        index
    }

    /// Resolves an index back to its string.
    ///
    /// # Panics
    ///
    /// Panics if the index was not produced by this table; symbols are only
    /// constructed through interning, so this indicates a corrupted handle.
    pub fn resolve(&self, index: u32) -> &'static str {
        *self
            .strings
            .get(&index)
            .unwrap_or_else(|| panic!("symbol index {} not present in string table", index))
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if nothing has been interned (never the case after
    /// keyword seeding).
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
