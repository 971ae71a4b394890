use reqwest::Method;
use tracing::info;

use crate::api::schema::{Order, OrderQuery, OrderSubmit, PageResult, PayInfo};
use crate::config::CancelOrderMethod;
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

/// 提交订单
pub async fn place_order(client: &HttpClient, submit: &OrderSubmit) -> ClientResult<Order> {
    let order: Order = client.post("/user/order/submit", submit).await?;
    info!(order_id = %order.order_id, total_price = order.total_price, "订单已提交");
    Ok(order)
}

pub async fn pay_order(client: &HttpClient, pay: &PayInfo) -> ClientResult<()> {
    client.put_unit("/user/order/payment", pay).await
}

/// 取消订单，HTTP 方法由配置决定
pub async fn cancel_order(
    client: &HttpClient,
    order_id: &str,
    method: CancelOrderMethod,
) -> ClientResult<()> {
    let method = match method {
        CancelOrderMethod::Put => Method::PUT,
        CancelOrderMethod::Post => Method::POST,
    };
    let path = format!("/user/order/cancel/{}", urlencoding::encode(order_id));
    client.send_unit::<(), ()>(method, &path, None, None).await
}

/// 历史订单，页码从 1 开始，未指定状态时不带 status 参数
pub async fn list_orders(
    client: &HttpClient,
    page: u32,
    page_size: u32,
    status: Option<i32>,
) -> ClientResult<PageResult<Order>> {
    let query = OrderQuery {
        page: page.max(1),
        page_size: page_size.max(1),
        status,
    };
    client
        .get_with_query("/user/order/historyOrders", &query)
        .await
}
