pub mod http;
pub mod storage;

pub use http::HttpClient;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
