//! TCP connect liveness probe

mod scanner;

pub use scanner::{is_open, TcpProber};
