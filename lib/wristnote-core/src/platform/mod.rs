pub use common::*;
pub use event_bridge::*;
pub use services::*;
pub use traits::*;

mod common;
mod event_bridge;
mod services;
mod traits;

pub mod console;
pub mod memory_store;
pub mod mock;
pub mod tokio_timer;
