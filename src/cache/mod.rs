// 本地会话缓存
// 登录令牌是客户端唯一跨请求、跨重启保存的状态

pub mod keys;
pub mod session;

pub use keys::LOGIN_USER_KEY;
pub use session::TokenStore;
