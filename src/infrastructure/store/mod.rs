mod memory_store;
mod redis_store;
mod store_factory;

pub use memory_store::MemoryJobStore;
pub use redis_store::RedisJobStore;
pub use store_factory::JobStoreFactory;
