//! tasktalk-transport — concrete transports for the task assistant backend.

pub mod http_chat_transport;

pub use http_chat_transport::HttpChatTransport;
