pub mod auth_gate;
pub mod cors;
pub mod structured_logger;

pub use auth_gate::AuthGate;
pub use cors::cors_middleware;
pub use structured_logger::StructuredLogger;
