use std::sync::Arc;

use reqwest::{Method, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::api::schema::ApiResponse;
use crate::cache::TokenStore;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 后端 REST 接口的传输层
///
/// 每次调用独立发出一个请求：不重试、不缓存、不合并相同的并发请求。
/// 登录令牌在构造请求时从 [`TokenStore`] 读取，有则带上 `Authorization: Bearer`。
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<TokenStore>,
    success_code: i32,
}

impl HttpClient {
    pub fn new(config: &Config, store: Arc<TokenStore>) -> ClientResult<Self> {
        let mut base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.api_base_url.clone()));
        }
        // 保证以 / 结尾，join 时才不会丢掉前缀路径
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Config(format!("创建 HTTP 客户端失败: {}", e)))?;

        Ok(HttpClient {
            http,
            base_url,
            store,
            success_code: config.success_code,
        })
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn success_code(&self) -> i32 {
        self.success_code
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// 发出请求并返回完整信封，由调用方决定如何取 data
    pub async fn request<T, B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let request_id = Uuid::new_v4().to_string();

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let token = self.store.token();
        let authenticated = token.is_some();
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        debug!(%method, path, %request_id, authenticated, "发送请求");

        let response = builder.send().await.map_err(|e| {
            warn!(%method, path, %request_id, error = %e, "请求发送失败");
            ClientError::Network(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            warn!(%method, path, %request_id, error = %e, "读取响应失败");
            ClientError::Network(e)
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<IgnoredAny>>(&bytes)
                .ok()
                .and_then(|envelope| envelope.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("请求失败").to_string());

            if status.is_server_error() {
                error!(%method, path, %request_id, status = status.as_u16(), %message, "服务端错误");
            } else {
                warn!(%method, path, %request_id, status = status.as_u16(), %message, "请求被拒绝");
            }
            return Err(ClientError::api(i32::from(status.as_u16()), message));
        }

        let envelope: ApiResponse<Value> = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, path, %request_id, error = %e, "响应不是合法的信封");
            ClientError::Decode(e.to_string())
        })?;

        if !envelope.is_success(self.success_code) {
            warn!(
                %method,
                path,
                %request_id,
                code = envelope.code,
                message = envelope.message(),
                "业务错误"
            );
            return Err(ClientError::api(envelope.code, envelope.message()));
        }

        let data = match envelope.data {
            Some(Value::Null) | None => None,
            Some(value) => Some(
                serde_json::from_value::<T>(value)
                    .map_err(|e| ClientError::Decode(format!("{} {}: {}", method, path, e)))?,
            ),
        };

        Ok(ApiResponse {
            code: envelope.code,
            message: envelope.message,
            data,
        })
    }

    pub async fn get<T>(&self, path: &str) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, (), ()>(Method::GET, path, None, None)
            .await?
            .into_data()
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.request::<T, (), Q>(Method::GET, path, None, Some(query))
            .await?
            .into_data()
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B, ()>(Method::POST, path, Some(body), None)
            .await?
            .into_data()
    }

    /// 不关心返回数据的请求，data 为任意值或缺失都算成功
    pub async fn send_unit<B, Q>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.request::<IgnoredAny, B, Q>(method, path, body, query)
            .await
            .map(|_| ())
    }

    pub async fn post_unit<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_unit::<B, ()>(Method::POST, path, Some(body), None)
            .await
    }

    pub async fn put_unit<B>(&self, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send_unit::<B, ()>(Method::PUT, path, Some(body), None)
            .await
    }

    pub async fn delete_unit(&self, path: &str) -> ClientResult<()> {
        self.send_unit::<(), ()>(Method::DELETE, path, None, None)
            .await
    }
}
