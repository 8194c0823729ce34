//! Service layer: board sessions (loading, intent application) plus the
//! background persistence flusher. Routes stay thin and delegate here.

pub mod persistence;
pub mod session;
