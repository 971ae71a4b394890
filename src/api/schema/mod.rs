// API 数据传输对象模块
// 包含所有与后端交互的数据结构

pub mod book;
pub mod cart;
pub mod common;
pub mod notice;
pub mod order;
pub mod user;

// 重新导出常用类型
pub use book::*;
pub use cart::*;
pub use common::*;
pub use notice::*;
pub use order::*;
pub use user::*;
