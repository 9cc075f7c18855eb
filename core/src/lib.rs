pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod item;
pub mod reconcile;
pub mod session;
pub mod task;
pub mod traits;
pub mod util;
