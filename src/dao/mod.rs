// src/dao/mod.rs

pub mod file;
pub mod memory;

/// 只读数据访问接口，`None` 与空集合对调用方含义相同
pub trait ReadableDao<K: ?Sized, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
}
