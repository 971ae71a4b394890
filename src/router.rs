use std::collections::HashMap;
use std::fmt;

use reqwest::Url;

use crate::error::{ClientError, ClientResult};

/// 前端页面路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    ShoppingCart,
    Search,
    Introduction,
    Login,
    Register,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::ShoppingCart,
        Route::Search,
        Route::Introduction,
        Route::Login,
        Route::Register,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::ShoppingCart => "shopping-cart",
            Route::Search => "search",
            Route::Introduction => "introduction",
            Route::Login => "login",
            Route::Register => "register",
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.name() == name)
    }

    /// 路径模板，`:xxx` 段为参数
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::ShoppingCart => "/shopping-cart",
            Route::Search => "/search",
            Route::Introduction => "/introduction/:id",
            Route::Login => "/login",
            Route::Register => "/register",
        }
    }

    // 只有一层嵌套：购物车、搜索、详情挂在首页布局下
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::ShoppingCart | Route::Search | Route::Introduction => Some(Route::Home),
            _ => None,
        }
    }

    pub fn uses_layout(&self) -> bool {
        matches!(self, Route::Home) || self.parent() == Some(Route::Home)
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::ShoppingCart)
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            Route::ShoppingCart => Some("我的购物车"),
            Route::Search => Some("搜索"),
            Route::Introduction => Some("书本详情"),
            _ => None,
        }
    }

    pub fn params(&self) -> Vec<&'static str> {
        self.path()
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 把路由名解析成可分享、可在新标签页打开的完整链接
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: Url,
}

impl RouteTable {
    pub fn new(app_base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(app_base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", app_base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(app_base_url.to_string()));
        }
        Ok(RouteTable { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, name: &str, params: &HashMap<String, String>) -> ClientResult<Url> {
        let route = Route::from_name(name).ok_or_else(|| ClientError::UnknownRoute(name.into()))?;
        self.resolve_route(route, |param| params.get(param).map(String::as_str))
    }

    pub fn resolve_with<'a>(&self, route: Route, params: &[(&str, &'a str)]) -> ClientResult<Url> {
        self.resolve_route(route, |param| {
            params
                .iter()
                .find(|(key, _)| *key == param)
                .map(|(_, value)| *value)
        })
    }

    fn resolve_route<'a, F>(&self, route: Route, lookup: F) -> ClientResult<Url>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut segments = Vec::new();
        for segment in route.path().split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix(':') {
                Some(param) => {
                    let value = lookup(param).filter(|v| !v.is_empty()).ok_or_else(|| {
                        ClientError::MissingRouteParam {
                            route: route.name().to_string(),
                            param: param.to_string(),
                        }
                    })?;
                    segments.push(value);
                }
                None => segments.push(segment),
            }
        }

        if segments.is_empty() {
            return Ok(self.base.clone());
        }

        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}
