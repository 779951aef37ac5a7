mod memory_store_test;
mod redis_store_test;
mod webhook_client_test;
