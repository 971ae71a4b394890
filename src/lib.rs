use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Url;

use api::operations::{admin, auth, cart, catalog, order, search};
use api::schema::*;
use cache::TokenStore;
use config::Config;
use infrastructure::{FileStorage, HttpClient};
use middleware::Navigation;
use router::{Route, RouteTable};

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod router;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ClientError, ClientResult, ValidationError};

/// 书城客户端入口
///
/// 持有配置、传输层、登录会话和前端路由表；会话以 `Arc` 注入传输层，
/// 登录/退出是唯一会修改它的操作。
#[derive(Clone)]
pub struct Bookstore {
    pub config: Config,
    client: HttpClient,
    store: Arc<TokenStore>,
    routes: RouteTable,
}

impl Bookstore {
    /// 使用配置中的会话目录做持久化存储，启动时读取已保存的会话
    pub fn new(config: Config) -> ClientResult<Self> {
        let store = Arc::new(TokenStore::load(FileStorage::new(&config.session_dir)));
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Arc<TokenStore>) -> ClientResult<Self> {
        let client = HttpClient::new(&config, store.clone())?;
        let routes = RouteTable::new(&config.app_base_url)?;
        Ok(Bookstore {
            config,
            client,
            store,
            routes,
        })
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn session(&self) -> &Arc<TokenStore> {
        &self.store
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }

    // 登录注册
    pub async fn login(&self, form: &LoginForm) -> ClientResult<Session> {
        auth::login(&self.client, form).await
    }

    pub async fn send_email_code(&self, email: &str) -> ClientResult<()> {
        auth::send_email_code(&self.client, email).await
    }

    pub async fn verify_code(&self, code: &str) -> ClientResult<CodeCheck> {
        auth::verify_code(&self.client, code).await
    }

    pub async fn login_with_code(&self, form: &CodeLogin) -> ClientResult<Session> {
        auth::login_with_code(&self.client, form).await
    }

    pub async fn register(&self, form: &RegisterForm) -> ClientResult<RegisteredUser> {
        auth::register(&self.client, form).await
    }

    pub fn logout(&self) -> ClientResult<()> {
        auth::logout(&self.client)
    }

    // 图书目录
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        catalog::categories(&self.client).await
    }

    pub async fn books(&self) -> ClientResult<Vec<Book>> {
        catalog::books(&self.client).await
    }

    pub async fn book(&self, id: i64) -> ClientResult<Book> {
        catalog::book(&self.client, id).await
    }

    pub async fn search(&self, query: &SearchQuery) -> ClientResult<PageResult<Book>> {
        search::search(&self.client, query).await
    }

    // 购物车
    pub async fn add_to_cart(&self, book_id: i64) -> ClientResult<()> {
        cart::add_to_cart(&self.client, book_id).await
    }

    pub async fn update_cart_item(&self, book_id: i64, number: u32) -> ClientResult<()> {
        cart::update_cart_item(&self.client, book_id, number).await
    }

    pub async fn remove_cart_item(&self, id: i64) -> ClientResult<()> {
        cart::remove_cart_item(&self.client, id).await
    }

    pub async fn clear_cart(&self) -> ClientResult<()> {
        cart::clear_cart(&self.client).await
    }

    pub async fn list_cart(&self) -> ClientResult<Vec<ShoppingCartItem>> {
        cart::list_cart(&self.client).await
    }

    // 订单
    pub async fn place_order(&self, submit: &OrderSubmit) -> ClientResult<Order> {
        order::place_order(&self.client, submit).await
    }

    pub async fn pay_order(&self, pay: &PayInfo) -> ClientResult<()> {
        order::pay_order(&self.client, pay).await
    }

    pub async fn cancel_order(&self, order_id: &str) -> ClientResult<()> {
        order::cancel_order(&self.client, order_id, self.config.cancel_order_method).await
    }

    pub async fn list_orders(
        &self,
        page: u32,
        page_size: u32,
        status: Option<i32>,
    ) -> ClientResult<PageResult<Order>> {
        order::list_orders(&self.client, page, page_size, status).await
    }

    // 图书管理
    pub async fn submit_book(&self, book: &Book) -> ClientResult<BookData> {
        admin::submit_book(&self.client, book).await
    }

    pub async fn delete_book(&self, id: i64) -> ClientResult<()> {
        admin::delete_book(&self.client, id).await
    }

    // 路由
    pub fn resolve(&self, name: &str, params: &HashMap<String, String>) -> ClientResult<Url> {
        self.routes.resolve(name, params)
    }

    pub fn book_url(&self, book_id: i64) -> ClientResult<Url> {
        utils::book_url(&self.routes, book_id)
    }

    pub fn guard(&self, route: Route) -> Navigation {
        middleware::guard(route, &self.store)
    }
}
