use tracing::debug;

use crate::api::schema::{Book, PageResult, SearchQuery};
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

/// 分页搜索图书，未设置的过滤条件不会发送
pub async fn search(client: &HttpClient, query: &SearchQuery) -> ClientResult<PageResult<Book>> {
    debug!(
        page = query.page(),
        page_size = query.page_size(),
        name = query.name.as_deref(),
        category_id = query.category_id,
        status = query.status,
        "搜索图书"
    );
    client.post("/user/book/page", query).await
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

    async fn server() -> MockServer {
        MockServer::start(
            StatusCode::OK,
            json!({ "code": 0, "data": { "total": 1, "records": [
                { "id": 3, "name": "活着", "author": "余华", "category_id": 1, "price": 20.0 }
            ] } }),
        )
        .await
    }

    fn client(server: &MockServer) -> HttpClient {
        HttpClient::new(&Config::new(server.url()), Arc::new(TokenStore::in_memory())).unwrap()
    }

    #[tokio::test]
    async fn without_filters_sends_only_paging() {
        let server = server().await;
        let page = search(&client(&server), &SearchQuery::new(1, 10)).await.unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.records[0].author, "余华");
        let req = server.last();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/user/book/page");
        assert_eq!(req.body, Some(json!({ "page": 1, "page_size": 10 })));
    }

    #[tokio::test]
    async fn with_filters_sends_everything() {
        let server = server().await;
        let query = SearchQuery::new(2, 20).name("活着").category_id(1).status(1);
        search(&client(&server), &query).await.unwrap();

        assert_eq!(
            server.last().body,
            Some(json!({ "page": 2, "page_size": 20, "name": "活着", "category_id": 1, "status": 1 }))
        );
    }
}
