// 图书管理（管理端接口）

use tracing::info;

use crate::api::schema::{Book, BookData};
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

/// 新增或保存图书，返回图书ID
pub async fn submit_book(client: &HttpClient, book: &Book) -> ClientResult<BookData> {
    let data: BookData = client.post("/admin/book", book).await?;
    info!(book_id = data.book_id, name = %book.name, "图书已保存");
    Ok(data)
}

pub async fn delete_book(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete_unit(&format!("/admin/book/{}", id)).await?;
    info!(book_id = id, "图书已删除");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TokenStore;
    use crate::config::Config;
    use crate::test_support::MockServer;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn submit_then_delete() {
        let server =
            MockServer::start(StatusCode::OK, json!({ "code": 0, "data": { "book_id": 31 } })).await;
        let client =
            HttpClient::new(&Config::new(server.url()), Arc::new(TokenStore::in_memory())).unwrap();

        let book = Book {
            name: "围城".into(),
            author: "钱钟书".into(),
            category_id: 1,
            price: 30.0,
            ..Book::default()
        };
        let data = submit_book(&client, &book).await.unwrap();
        assert_eq!(data.book_id, 31);
        let req = server.last();
        assert_eq!(req.path, "/admin/book");
        assert_eq!(req.body.unwrap()["author"], "钱钟书");

        delete_book(&client, 31).await.unwrap();
        assert_eq!(server.last().method, "DELETE");
        assert_eq!(server.last().path, "/admin/book/31");
    }
}
