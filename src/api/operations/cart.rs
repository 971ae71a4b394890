// 购物车
// 购物车完全由服务端维护，客户端只发增删改查请求

use crate::api::schema::{AddCartForm, ShoppingCartItem, UpdateCartForm};
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

pub async fn add_to_cart(client: &HttpClient, book_id: i64) -> ClientResult<()> {
    client
        .post_unit("/user/shoppingCart/add", &AddCartForm { book_id })
        .await
}

/// 修改某本书在购物车中的数量
pub async fn update_cart_item(client: &HttpClient, book_id: i64, number: u32) -> ClientResult<()> {
    client
        .put_unit("/user/shoppingCart/update", &UpdateCartForm { book_id, number })
        .await
}

pub async fn remove_cart_item(client: &HttpClient, id: i64) -> ClientResult<()> {
    client.delete_unit(&format!("/user/shoppingCart/{}", id)).await
}

pub async fn clear_cart(client: &HttpClient) -> ClientResult<()> {
    client.delete_unit("/user/shoppingCart/clean").await
}

pub async fn list_cart(client: &HttpClient) -> ClientResult<Vec<ShoppingCartItem>> {
    client.get("/user/shoppingCart/list").await
}
