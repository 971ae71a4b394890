// 订单相关的数据结构定义

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 订单中的单本图书
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub book_id: i64,
    pub title: String,
    pub quantity: u32,
    pub price: f64,
}

/// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub books: Vec<OrderItem>,
    pub total_price: f64,
    pub status: i32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub create_time: String,
}

/// 提交订单请求，字段名沿用后端的驼峰格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmit {
    pub address_book_id: i64,
    pub pay_method: i32,
    /// 预计送达时间，格式 yyyy-MM-dd HH:mm:ss
    #[serde(with = "delivery_time")]
    pub estimated_delivery_time: NaiveDateTime,
    pub shipping_fee: f64,
    pub amount: f64,
}

/// 支付请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInfo {
    pub order_id: String,
    pub pay_method: i32,
}

/// 历史订单查询参数，以查询字符串发送
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

mod delivery_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(de::Error::custom)
    }
}
