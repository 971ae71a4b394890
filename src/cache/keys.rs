/// 登录会话在持久化存储中的唯一键
pub const LOGIN_USER_KEY: &str = "login_user";
