pub mod middleware;
pub mod policy;
