pub mod global_record;
