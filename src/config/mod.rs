use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_APP_BASE_URL: &str = "http://localhost:5173/";
pub const DEFAULT_SESSION_DIR: &str = ".bookstore";

/// 取消订单使用的 HTTP 方法
///
/// 后端不同版本对同一个取消动作分别用过 PUT 和 POST，由部署方决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelOrderMethod {
    #[default]
    Put,
    Post,
}

impl FromStr for CancelOrderMethod {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUT" => Ok(CancelOrderMethod::Put),
            "POST" => Ok(CancelOrderMethod::Post),
            other => Err(ClientError::Config(format!(
                "BOOKSTORE_CANCEL_ORDER_METHOD 只支持 PUT 或 POST，实际为 {}",
                other
            ))),
        }
    }
}

impl fmt::Display for CancelOrderMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelOrderMethod::Put => write!(f, "PUT"),
            CancelOrderMethod::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub app_base_url: String,
    pub session_dir: PathBuf,
    pub success_code: i32,
    pub request_timeout_secs: Option<u64>,
    pub cancel_order_method: CancelOrderMethod,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
            app_base_url: DEFAULT_APP_BASE_URL.to_string(),
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
            success_code: crate::utils::error_codes::SUCCESS,
            request_timeout_secs: None,
            cancel_order_method: CancelOrderMethod::default(),
        }
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::load(None)
    }

    /// 读取 .env 与环境变量；传入的后端地址优先于 BOOKSTORE_API_BASE_URL
    pub fn load(api_base_url: Option<String>) -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let api_base_url = match api_base_url {
            Some(url) => url,
            None => env::var("BOOKSTORE_API_BASE_URL")
                .map_err(|_| ClientError::Config("缺少环境变量 BOOKSTORE_API_BASE_URL".into()))?,
        };

        let mut config = Config::new(api_base_url);

        if let Ok(app_base_url) = env::var("BOOKSTORE_APP_BASE_URL") {
            config.app_base_url = app_base_url;
        }
        if let Ok(dir) = env::var("BOOKSTORE_SESSION_DIR") {
            config.session_dir = PathBuf::from(dir);
        }
        if let Ok(code) = env::var("BOOKSTORE_SUCCESS_CODE") {
            config.success_code = code.trim().parse().map_err(|_| {
                ClientError::Config(format!("BOOKSTORE_SUCCESS_CODE 不是整数: {}", code))
            })?;
        }
        if let Ok(secs) = env::var("BOOKSTORE_REQUEST_TIMEOUT_SECS") {
            let secs = secs.trim().trim_end_matches('s');
            config.request_timeout_secs = Some(secs.parse().map_err(|_| {
                ClientError::Config(format!("BOOKSTORE_REQUEST_TIMEOUT_SECS 无效: {}", secs))
            })?);
        }
        if let Ok(method) = env::var("BOOKSTORE_CANCEL_ORDER_METHOD") {
            config.cancel_order_method = method.parse()?;
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn with_app_base_url(mut self, app_base_url: impl Into<String>) -> Self {
        self.app_base_url = app_base_url.into();
        self
    }

    pub fn with_success_code(mut self, code: i32) -> Self {
        self.success_code = code;
        self
    }

    pub fn with_cancel_order_method(mut self, method: CancelOrderMethod) -> Self {
        self.cancel_order_method = method;
        self
    }

    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }
}
