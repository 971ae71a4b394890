//! 命令行参数定义（使用 clap）

use clap::{Parser, Subcommand};

/// 书城命令行客户端
#[derive(Parser, Debug, Clone)]
#[command(name = "bookstore")]
#[command(version)]
#[command(about = "书城后端接口的命令行客户端：浏览、搜索、购物车、订单与登录")]
pub struct Cli {
    /// 后端地址，覆盖环境变量 BOOKSTORE_API_BASE_URL
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 图书分类列表
    Categories,
    /// 首页图书列表
    Books,
    /// 图书详情
    Book { id: i64 },
    /// 分页搜索图书
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        status: Option<i32>,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "10")]
        page_size: u32,
    },
    /// 邮箱密码登录
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// 发送登录验证码到邮箱
    SendCode {
        #[arg(long)]
        email: String,
    },
    /// 邮箱验证码登录
    LoginCode {
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
    /// 注册新用户
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// 确认密码
        #[arg(long)]
        confirm: String,
    },
    /// 退出登录，清除本地会话
    Logout,
    /// 显示当前登录用户
    Whoami,
    /// 购物车操作
    #[command(subcommand)]
    Cart(CartCommand),
    /// 订单操作
    #[command(subcommand)]
    Orders(OrderCommand),
    /// 生成前端页面链接
    Link {
        /// 路由名：home, shopping-cart, search, introduction, login, register
        route: String,
        /// introduction 页面需要的图书ID
        #[arg(long)]
        id: Option<i64>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CartCommand {
    List,
    Add { book_id: i64 },
    Update { book_id: i64, number: u32 },
    Remove { id: i64 },
    Clear,
}

#[derive(Subcommand, Debug, Clone)]
pub enum OrderCommand {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "10")]
        page_size: u32,
        #[arg(long)]
        status: Option<i32>,
    },
    Place {
        #[arg(long)]
        address_book_id: i64,
        #[arg(long, default_value = "1")]
        pay_method: i32,
        /// 预计送达时间，格式 "2025-03-01 18:30:00"
        #[arg(long)]
        delivery_time: String,
        #[arg(long, default_value = "0")]
        shipping_fee: f64,
        #[arg(long)]
        amount: f64,
    },
    Pay {
        order_id: String,
        #[arg(long, default_value = "1")]
        pay_method: i32,
    },
    Cancel { order_id: String },
}
