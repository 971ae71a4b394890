// API 调用模块
// 每个函数对应后端的一个接口，只发一次请求，不做重试和跨字段校验

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod search;
