use serde::{Deserialize, Serialize};

/// 站内公告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// 服务端以字符串下发
    pub id: String,
    pub content: String,
    /// 1 展示中，0 已下线
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub create_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notice_decodes_from_wire() {
        let notice: Notice = serde_json::from_value(json!({
            "id": "n-1",
            "content": "满 100 包邮",
            "status": 1,
            "create_time": "2024-05-01 10:00:00"
        }))
        .unwrap();
        assert_eq!(notice.id, "n-1");
        assert_eq!(notice.status, 1);

        let back: Notice = serde_json::from_value(serde_json::to_value(&notice).unwrap()).unwrap();
        assert_eq!(back, notice);
    }
}
