use std::sync::{PoisonError, RwLock};

use tracing::{debug, warn};

use crate::api::schema::Session;
use crate::cache::keys::LOGIN_USER_KEY;
use crate::error::{ClientError, ClientResult};
use crate::infrastructure::storage::{MemoryStorage, SessionStorage};

/// 登录会话存储
///
/// 启动时从持久化存储读取一次，之后读走内存，写入同时落盘。
/// 进程内同一时刻只有一个会话，后写入的覆盖先前的。
pub struct TokenStore {
    storage: Box<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl TokenStore {
    pub fn load<S>(storage: S) -> Self
    where
        S: SessionStorage + 'static,
    {
        let current = read_session(&storage);
        TokenStore {
            storage: Box::new(storage),
            current: RwLock::new(current),
        }
    }

    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }

    pub fn get(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 内存与存储在同一把写锁下更新，并发写入时两者保持一致
    pub fn set(&self, session: Session) -> ClientResult<()> {
        let json =
            serde_json::to_string(&session).map_err(|e| ClientError::Encode(e.to_string()))?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.storage.write(LOGIN_USER_KEY, &json)?;
        debug!(user_id = session.id, username = %session.username, "保存登录会话");
        *current = Some(session);
        Ok(())
    }

    pub fn clear(&self) -> ClientResult<()> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        self.storage.remove(LOGIN_USER_KEY)?;
        *current = None;
        debug!("清除登录会话");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(Session::is_authenticated)
    }

    /// 当前可用于鉴权的令牌，空令牌视为未登录
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|session| session.is_authenticated())
            .map(|session| session.token.clone())
    }

    /// 重新从持久化存储读取，外部进程修改过存储时使用
    pub fn reload(&self) -> Option<Session> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let session = read_session(self.storage.as_ref());
        *current = session.clone();
        session
    }
}

fn read_session(storage: &dyn SessionStorage) -> Option<Session> {
    let raw = match storage.read(LOGIN_USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "读取登录会话失败");
            return None;
        }
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(error = %e, "登录会话解析失败，按未登录处理");
            None
        }
    }
}
