// Adapters layer: concrete implementations for external systems (the portal
// session over HTTP, local file output).

pub mod session;
pub mod storage;
