use serde::{Deserialize, Serialize};

/// 购物车条目，由服务端维护
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCartItem {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub user_id: i64,
    pub book_id: i64,
    /// 数量
    pub number: u32,
    /// 金额
    pub amount: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub create_time: String,
}

// 加入购物车
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartForm {
    pub book_id: i64,
}

// 更新购物车
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartForm {
    pub book_id: i64,
    pub number: u32,
}
