pub mod links;
pub mod validation;

pub use links::book_url;
pub use validation::{
    is_valid_email, is_valid_phone, validate_email, validate_password,
    validate_password_confirmation, validate_phone, with_callback,
};

pub mod error_codes {
    /// 信封 code 的默认成功值，可通过 BOOKSTORE_SUCCESS_CODE 覆盖
    pub const SUCCESS: i32 = 0;
}
