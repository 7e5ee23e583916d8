//! 永続キー・バリューストア
//!
//! ブラウザの localStorage 相当。値はすべて文字列。
//! 読み込みはベストエフォートで、存在しない・壊れた値はデフォルト扱い。

use crate::error::Result;
use std::collections::HashMap;

/// ストレージキー
pub mod keys {
    pub const TABLE_SESSION: &str = "tableSession";
    pub const HAS_ORDERED: &str = "hasOrdered";
    pub const ORDER_TOTAL: &str = "orderTotal";
    pub const IS_PAID: &str = "isPaid";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・ストレージ非対応環境用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
