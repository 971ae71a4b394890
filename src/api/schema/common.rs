use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// 通用的API响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 业务码，与配置的成功码相等表示成功
    pub code: i32,
    /// 提示信息，部分后端版本字段名为 msg
    #[serde(default, alias = "msg")]
    pub message: Option<String>,
    /// 响应数据，失败或无返回值时为 None
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self, success_code: i32) -> bool {
        self.code == success_code
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn into_data(self) -> ClientResult<T> {
        self.data.ok_or(ClientError::MissingData)
    }
}

/// 分页结果，页码从 1 开始
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
