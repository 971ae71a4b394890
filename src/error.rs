use thiserror::Error;

/// 客户端统一错误
#[derive(Error, Debug)]
pub enum ClientError {
    /// 传输层失败，没有拿到服务端响应（连接失败、DNS、超时）
    #[error("网络错误: {0}")]
    Network(#[source] reqwest::Error),

    /// 服务端返回的业务错误，或 HTTP 状态码不在 2xx
    #[error("接口错误 [{code}]: {message}")]
    Api { code: i32, message: String },

    #[error("响应解析失败: {0}")]
    Decode(String),

    #[error("序列化失败: {0}")]
    Encode(String),

    #[error("响应缺少 data 字段")]
    MissingData,

    #[error("本地存储错误: {0}")]
    Storage(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("未知路由: {0}")]
    UnknownRoute(String),

    #[error("路由 {route} 缺少参数 {param}")]
    MissingRouteParam { route: String, param: String },

    #[error("无效的 URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        ClientError::Api {
            code,
            message: message.into(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// 表单字段校验失败，只携带提示信息
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}
