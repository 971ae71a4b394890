// 图书、分类与搜索相关的数据结构定义

use serde::{Deserialize, Deserializer, Serialize, de};

/// 图书
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    /// 旧版后端以字符串下发，新版为数字，解码时统一成整数
    #[serde(deserialize_with = "category_id_from_either")]
    pub category_id: i64,
    pub price: f64,
    pub image: String,
    pub description: String,
    /// 1 上架，0 下架
    pub status: i32,
    pub stock: i32,
    pub isbn: String,
    pub location: String,
    pub publisher: String,
    pub update_time: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryIdRepr {
    Number(i64),
    Text(String),
}

fn category_id_from_either<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match CategoryIdRepr::deserialize(deserializer)? {
        CategoryIdRepr::Number(id) => Ok(id),
        CategoryIdRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("无效的分类ID: {:?}", text))),
    }
}

/// 新增图书后返回的ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookData {
    pub book_id: i64,
}

/// 图书库存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStock {
    pub id: i64,
    pub book_id: i64,
    pub stock: i32,
}

/// 图书分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub status: i32,
}

/// 分页搜索条件，未设置的过滤项不会出现在请求体中
/// 页码和每页条数只能通过 [`SearchQuery::new`] 设置，保证不小于 1
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    page: u32,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl SearchQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        SearchQuery {
            page: page.max(1),
            page_size: page_size.max(1),
            name: None,
            category_id: None,
            status: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 空白关键字视为未设置
    pub fn name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery::new(1, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_id_accepts_string_and_number() {
        let old: Book = serde_json::from_value(json!({ "id": 1, "category_id": "12" })).unwrap();
        let new: Book = serde_json::from_value(json!({ "id": 1, "category_id": 12 })).unwrap();
        assert_eq!(old.category_id, 12);
        assert_eq!(old, new);

        let bad = serde_json::from_value::<Book>(json!({ "id": 1, "category_id": "novel" }));
        assert!(bad.is_err());
    }

    #[test]
    fn search_query_omits_absent_filters() {
        let body = serde_json::to_value(SearchQuery::new(1, 10).name("   ")).unwrap();
        assert_eq!(body, json!({ "page": 1, "page_size": 10 }));

        let body =
            serde_json::to_value(SearchQuery::new(0, 0).name("三体").category_id(3).status(1))
                .unwrap();
        assert_eq!(
            body,
            json!({ "page": 1, "page_size": 1, "name": "三体", "category_id": 3, "status": 1 })
        );
    }

    #[test]
    fn search_query_paging_never_below_one() {
        let query = SearchQuery::new(0, 0);
        assert_eq!((query.page(), query.page_size()), (1, 1));

        let query = SearchQuery::default().name("活着");
        assert_eq!((query.page(), query.page_size()), (1, 10));
    }

    #[test]
    fn book_stock_decodes() {
        let stock: BookStock =
            serde_json::from_value(json!({ "id": 2, "book_id": 7, "stock": 30 })).unwrap();
        assert_eq!(
            stock,
            BookStock {
                id: 2,
                book_id: 7,
                stock: 30
            }
        );
        assert_eq!(
            serde_json::to_value(&stock).unwrap(),
            json!({ "id": 2, "book_id": 7, "stock": 30 })
        );
    }
}
