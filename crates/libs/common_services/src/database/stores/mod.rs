pub mod memory_record_store;
pub mod pg_record_store;
pub mod record_store;
