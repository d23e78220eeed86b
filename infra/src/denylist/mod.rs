//! Redis-backed denylist module

pub mod redis_store;

pub use redis_store::RedisRevocationStore;
