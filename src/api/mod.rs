// 后端接口：数据结构定义与调用
pub mod operations;
pub mod schema;
