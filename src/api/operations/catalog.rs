use crate::api::schema::{Book, Category};
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

/// 获取分类
pub async fn categories(client: &HttpClient) -> ClientResult<Vec<Category>> {
    client.get("/user/category/list").await
}

/// 获取首页图书
pub async fn books(client: &HttpClient) -> ClientResult<Vec<Book>> {
    client.get("/user/book/list").await
}

/// 图书详情
pub async fn book(client: &HttpClient, id: i64) -> ClientResult<Book> {
    client.get(&format!("/admin/book/{}", id)).await
}
