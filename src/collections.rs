use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion ordered map with rustc_hash for fast hashing
/// Parent maps lean on the stable indices, so plain HashMap is not enough
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
