use std::collections::HashMap;
use std::process::ExitCode;

use bookstore_client::{
    Bookstore, ClientError, ClientResult,
    api::schema::{CodeLogin, LoginForm, OrderSubmit, PayInfo, RegisterForm, SearchQuery},
    config::Config,
    utils::{validate_email, validate_password_confirmation},
};
use chrono::NaiveDateTime;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{CartCommand, Cli, Command, OrderCommand};

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志，输出到 stderr，stdout 只留给结果
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    // 加载配置
    let config = Config::load(cli.api_base_url)?;
    let bookstore = Bookstore::new(config)?;

    match cli.command {
        Command::Categories => print(&bookstore.categories().await?),
        Command::Books => print(&bookstore.books().await?),
        Command::Book { id } => print(&bookstore.book(id).await?),
        Command::Search {
            name,
            category_id,
            status,
            page,
            page_size,
        } => {
            let mut query = SearchQuery::new(page, page_size);
            if let Some(name) = name {
                query = query.name(name);
            }
            if let Some(category_id) = category_id {
                query = query.category_id(category_id);
            }
            if let Some(status) = status {
                query = query.status(status);
            }
            print(&bookstore.search(&query).await?)
        }
        Command::Login { email, password } => {
            validate_email(&email).map_err(invalid)?;
            print(&bookstore.login(&LoginForm { email, password }).await?)
        }
        Command::SendCode { email } => {
            validate_email(&email).map_err(invalid)?;
            bookstore.send_email_code(&email).await?;
            tracing::info!("验证码已发送到 {}", email);
            Ok(())
        }
        Command::LoginCode { email, code } => {
            print(&bookstore.login_with_code(&CodeLogin { email, code }).await?)
        }
        Command::Register {
            username,
            email,
            password,
            confirm,
        } => {
            validate_email(&email).map_err(invalid)?;
            validate_password_confirmation(&password, &confirm).map_err(invalid)?;
            let form = RegisterForm {
                username,
                password,
                email,
            };
            print(&bookstore.register(&form).await?)
        }
        Command::Logout => bookstore.logout(),
        Command::Whoami => print(&bookstore.session().get()),
        Command::Cart(cmd) => match cmd {
            CartCommand::List => print(&bookstore.list_cart().await?),
            CartCommand::Add { book_id } => bookstore.add_to_cart(book_id).await,
            CartCommand::Update { book_id, number } => {
                bookstore.update_cart_item(book_id, number).await
            }
            CartCommand::Remove { id } => bookstore.remove_cart_item(id).await,
            CartCommand::Clear => bookstore.clear_cart().await,
        },
        Command::Orders(cmd) => match cmd {
            OrderCommand::List {
                page,
                page_size,
                status,
            } => print(&bookstore.list_orders(page, page_size, status).await?),
            OrderCommand::Place {
                address_book_id,
                pay_method,
                delivery_time,
                shipping_fee,
                amount,
            } => {
                let estimated_delivery_time =
                    NaiveDateTime::parse_from_str(&delivery_time, "%Y-%m-%d %H:%M:%S").map_err(
                        |e| ClientError::Config(format!("送达时间格式错误 {}: {}", delivery_time, e)),
                    )?;
                let submit = OrderSubmit {
                    address_book_id,
                    pay_method,
                    estimated_delivery_time,
                    shipping_fee,
                    amount,
                };
                print(&bookstore.place_order(&submit).await?)
            }
            OrderCommand::Pay {
                order_id,
                pay_method,
            } => {
                bookstore
                    .pay_order(&PayInfo {
                        order_id,
                        pay_method,
                    })
                    .await
            }
            OrderCommand::Cancel { order_id } => bookstore.cancel_order(&order_id).await,
        },
        Command::Link { route, id } => {
            let mut params = HashMap::new();
            if let Some(id) = id {
                params.insert("id".to_string(), id.to_string());
            }
            println!("{}", bookstore.resolve(&route, &params)?);
            Ok(())
        }
    }
}

fn invalid(e: bookstore_client::ValidationError) -> ClientError {
    ClientError::Config(format!("参数校验失败: {}", e))
}

fn print<T: Serialize>(value: &T) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ClientError::Encode(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
