use reqwest::Url;

use crate::error::ClientResult;
use crate::router::{Route, RouteTable};

/// 图书详情页链接，用于分享或在新标签页打开
pub fn book_url(routes: &RouteTable, book_id: i64) -> ClientResult<Url> {
    let id = book_id.to_string();
    routes.resolve_with(Route::Introduction, &[("id", id.as_str())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_introduction_link() {
        let routes = RouteTable::new("https://books.example.com").unwrap();
        let url = book_url(&routes, 42).unwrap();
        assert_eq!(url.as_str(), "https://books.example.com/introduction/42");
    }
}
