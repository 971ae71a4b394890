use tracing::debug;

use crate::cache::TokenStore;
use crate::router::Route;

/// 路由守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// 需要登录的页面在未登录时跳转到登录页
pub fn guard(route: Route, store: &TokenStore) -> Navigation {
    if route.requires_auth() && !store.is_logged_in() {
        debug!(route = %route, "未登录，跳转到登录页");
        return Navigation::Redirect(Route::Login);
    }
    Navigation::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::Session;

    #[test]
    fn redirects_only_protected_routes() {
        let store = TokenStore::in_memory();
        assert_eq!(guard(Route::ShoppingCart, &store), Navigation::Redirect(Route::Login));
        assert_eq!(guard(Route::Search, &store), Navigation::Proceed);
        assert_eq!(guard(Route::Login, &store), Navigation::Proceed);

        store
            .set(Session {
                id: 1,
                username: "reader".into(),
                email: "reader@example.com".into(),
                avatar: String::new(),
                token: "tok".into(),
            })
            .unwrap();
        assert_eq!(guard(Route::ShoppingCart, &store), Navigation::Proceed);
    }
}
