//! 表单字段校验
//!
//! 核心逻辑返回 `Result<(), ValidationError>`，表单组件需要的回调形式通过
//! [`with_callback`] 适配。

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^1[3-9][0-9]{9}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("请输入邮箱"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::new("邮箱格式不正确"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::new("请输入手机号"));
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::new("手机号格式不正确"));
    }
    Ok(())
}

/// 密码长度按字符计，闭区间 [8, 20]
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len == 0 {
        return Err(ValidationError::new("请输入密码"));
    }
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationError::new(format!(
            "密码长度需在 {} 到 {} 位之间",
            PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
        )));
    }
    Ok(())
}

pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::new("两次输入的密码不一致"));
    }
    validate_password(confirmation)
}

/// 把校验结果转换成表单库的回调约定：失败时传入错误，成功时传入 None
pub fn with_callback<F>(result: Result<(), ValidationError>, callback: F)
where
    F: FnOnce(Option<ValidationError>),
{
    callback(result.err())
}
