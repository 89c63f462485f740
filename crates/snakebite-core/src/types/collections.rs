//! Hash collection aliases used for reference tables.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
