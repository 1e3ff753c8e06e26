pub mod pagination;
pub mod shutdown;

pub use pagination::{PageQuery, PageRequest, PaginatedResult};
pub use shutdown::{listen_for_shutdown_signals, ShutdownSignal};
