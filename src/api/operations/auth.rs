// 登录注册
// 登录成功的会话会写入 TokenStore，后续请求自动携带令牌

use reqwest::Method;
use tracing::info;

use crate::api::schema::{
    CodeCheck, CodeLogin, LoginForm, RegisterForm, RegisteredUser, Session, VerifyCodeRequest,
};
use crate::error::ClientResult;
use crate::infrastructure::http::HttpClient;

/// 邮箱密码登录
pub async fn login(client: &HttpClient, form: &LoginForm) -> ClientResult<Session> {
    let session: Session = client.post("/user/login/password", form).await?;
    client.store().set(session.clone())?;
    info!(user_id = session.id, username = %session.username, "密码登录成功");
    Ok(session)
}

/// 向邮箱发送登录验证码
pub async fn send_email_code(client: &HttpClient, email: &str) -> ClientResult<()> {
    client
        .send_unit::<(), _>(
            Method::POST,
            "/user/login/send",
            None,
            Some(&[("email", email)]),
        )
        .await
}

/// 校验验证码是否正确
pub async fn verify_code(client: &HttpClient, code: &str) -> ClientResult<CodeCheck> {
    client
        .post(
            "/user/login/verify",
            &VerifyCodeRequest {
                code: code.to_string(),
            },
        )
        .await
}

/// 邮箱验证码登录
pub async fn login_with_code(client: &HttpClient, form: &CodeLogin) -> ClientResult<Session> {
    let session: Session = client.post("/user/login/code", form).await?;
    client.store().set(session.clone())?;
    info!(user_id = session.id, username = %session.username, "验证码登录成功");
    Ok(session)
}

pub async fn register(client: &HttpClient, form: &RegisterForm) -> ClientResult<RegisteredUser> {
    client.post("/user/register", form).await
}

/// 退出登录只清理本地会话，后端没有对应接口
pub fn logout(client: &HttpClient) -> ClientResult<()> {
    client.store().clear()?;
    info!("已退出登录");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TokenStore;
    use crate::config::Config;
    use crate::error::ClientError;
    use crate::test_support::MockServer;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn client(server: &MockServer) -> HttpClient {
        HttpClient::new(&Config::new(server.url()), Arc::new(TokenStore::in_memory())).unwrap()
    }

    fn session_json() -> serde_json::Value {
        json!({
            "id": 9,
            "username": "reader",
            "email": "reader@example.com",
            "avatar": "",
            "token": "tok-9"
        })
    }

    #[tokio::test]
    async fn login_persists_session() {
        let server =
            MockServer::start(StatusCode::OK, json!({ "code": 0, "data": session_json() })).await;
        let client = client(&server);

        let form = LoginForm {
            email: "reader@example.com".into(),
            password: "password123".into(),
        };
        let session = login(&client, &form).await.unwrap();

        assert_eq!(session.token, "tok-9");
        assert_eq!(client.store().get(), Some(session));
        let req = server.last();
        assert_eq!(req.method, "POST");
        assert_eq!(req.path, "/user/login/password");
        assert_eq!(
            req.body,
            Some(json!({ "email": "reader@example.com", "password": "password123" }))
        );
    }

    #[tokio::test]
    async fn bad_credentials_leave_store_untouched() {
        let server =
            MockServer::start(StatusCode::OK, json!({ "code": 1002, "message": "密码错误" })).await;
        let client = client(&server);

        let form = LoginForm {
            email: "reader@example.com".into(),
            password: "wrong".into(),
        };
        let err = login(&client, &form).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { code: 1002, .. }));
        assert!(!client.store().is_logged_in());
    }

    #[tokio::test]
    async fn send_code_puts_email_in_query() {
        let server = MockServer::start(StatusCode::OK, json!({ "code": 0, "data": {} })).await;
        let client = client(&server);

        send_email_code(&client, "a+b@example.com").await.unwrap();
        let req = server.last();
        assert_eq!(req.path, "/user/login/send");
        assert_eq!(
            req.query_pairs(),
            vec![("email".to_string(), "a+b@example.com".to_string())]
        );
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn code_login_and_logout() {
        let server =
            MockServer::start(StatusCode::OK, json!({ "code": 0, "data": session_json() })).await;
        let client = client(&server);

        let form = CodeLogin {
            email: "reader@example.com".into(),
            code: "123456".into(),
        };
        login_with_code(&client, &form).await.unwrap();
        assert_eq!(server.last().path, "/user/login/code");
        assert!(client.store().is_logged_in());

        logout(&client).unwrap();
        assert!(!client.store().is_logged_in());
    }

    #[tokio::test]
    async fn verify_code_decodes_flag() {
        let server =
            MockServer::start(StatusCode::OK, json!({ "code": 0, "data": { "data": true } })).await;
        let client = client(&server);

        let check = verify_code(&client, "654321").await.unwrap();
        assert!(check.data);
        assert_eq!(server.last().body, Some(json!({ "code": "654321" })));
    }

    #[tokio::test]
    async fn register_ignores_echoed_password() {
        let server = MockServer::start(
            StatusCode::OK,
            json!({ "code": 0, "data": { "username": "new", "password": "secret123", "email": "n@e.co" } }),
        )
        .await;
        let client = client(&server);

        let user = register(
            &client,
            &RegisterForm {
                username: "new".into(),
                password: "secret123".into(),
                email: "n@e.co".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(user.username, "new");
        assert_eq!(server.last().path, "/user/register");
        assert!(!client.store().is_logged_in());
    }
}
