mod send;
mod signing;

pub use send::{HttpSend, ReqwestHttpSend};
pub use signing::{SigningTransport, TransportOptions};
