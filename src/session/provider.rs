//! セッション取得元
//!
//! ストレージ → URLの `qr` → 生成したモックセッション の順に試し、
//! 最初に得られたものを使う。順序は `default_providers` のリストそのもの。

use crate::config::AppConfig;
use crate::storage::{keys, KeyValueStore};
use chrono::{DateTime, Utc};
use table_order_common::{parse_qr, TableSession};

/// セッション解決時の入力
pub struct SessionContext<'a> {
    pub store: &'a dyn KeyValueStore,
    /// URLクエリ `qr` の値（デコード済み）
    pub qr_param: Option<&'a str>,
    pub now: DateTime<Utc>,
}

/// セッションの出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Stored,
    Qr,
    Generated,
}

impl SessionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionSource::Stored => "stored",
            SessionSource::Qr => "qr",
            SessionSource::Generated => "generated",
        }
    }

    /// ストレージに書き戻す必要があるか
    pub fn should_persist(&self) -> bool {
        !matches!(self, SessionSource::Stored)
    }

    /// URLを書き換える必要があるか
    pub fn should_rewrite_url(&self) -> bool {
        matches!(self, SessionSource::Generated)
    }
}

pub trait SessionProvider {
    fn source(&self) -> SessionSource;
    fn provide(&self, ctx: &SessionContext<'_>) -> Option<TableSession>;
}

/// 保存済みセッション
pub struct StoredSessionProvider;

impl SessionProvider for StoredSessionProvider {
    fn source(&self) -> SessionSource {
        SessionSource::Stored
    }

    fn provide(&self, ctx: &SessionContext<'_>) -> Option<TableSession> {
        let raw = ctx.store.get(keys::TABLE_SESSION)?;
        match serde_json::from_str::<TableSession>(&raw) {
            Ok(session) if session.is_complete() => Some(session),
            Ok(_) => {
                log::warn!("保存済みセッションが不完全なため無視します");
                None
            }
            Err(e) => {
                log::warn!("保存済みセッションの解析に失敗: {}", e);
                None
            }
        }
    }
}

/// URLの `qr` パラメータ
pub struct QrSessionProvider;

impl SessionProvider for QrSessionProvider {
    fn source(&self) -> SessionSource {
        SessionSource::Qr
    }

    fn provide(&self, ctx: &SessionContext<'_>) -> Option<TableSession> {
        let raw = ctx.qr_param?;
        let Some(data) = parse_qr(raw) else {
            log::warn!("不正なQRパラメータを無視します: {}", raw);
            return None;
        };
        Some(TableSession {
            table_id: data.table_id,
            business_id: data.business_id,
            session_token: data.session_token,
            started_at: ctx.now,
        })
    }
}

/// モックセッションの生成（常に成功）
pub struct GeneratedSessionProvider {
    business_id: String,
    table_id: String,
    token_length: usize,
    generate_token: Box<dyn Fn(usize) -> String>,
}

impl GeneratedSessionProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_token_fn(config, generate_token)
    }

    /// トークン生成関数を差し替える（テスト用）
    pub fn with_token_fn<F>(config: &AppConfig, generate_token: F) -> Self
    where
        F: Fn(usize) -> String + 'static,
    {
        Self {
            business_id: config.fallback_business_id.clone(),
            table_id: config.fallback_table_id.clone(),
            token_length: config.token_length,
            generate_token: Box::new(generate_token),
        }
    }
}

impl SessionProvider for GeneratedSessionProvider {
    fn source(&self) -> SessionSource {
        SessionSource::Generated
    }

    fn provide(&self, ctx: &SessionContext<'_>) -> Option<TableSession> {
        Some(TableSession {
            table_id: self.table_id.clone(),
            business_id: self.business_id.clone(),
            session_token: (self.generate_token)(self.token_length),
            started_at: ctx.now,
        })
    }
}

/// 既定の優先順: ストレージ → QR → 生成
pub fn default_providers(config: &AppConfig) -> Vec<Box<dyn SessionProvider>> {
    vec![
        Box::new(StoredSessionProvider),
        Box::new(QrSessionProvider),
        Box::new(GeneratedSessionProvider::new(config)),
    ]
}

/// 先頭から順に試し、最初に得られたセッションを返す
pub fn resolve(
    providers: &[Box<dyn SessionProvider>],
    ctx: &SessionContext<'_>,
) -> Option<(TableSession, SessionSource)> {
    providers.iter().find_map(|provider| {
        provider
            .provide(ctx)
            .map(|session| (session, provider.source()))
    })
}

/// ランダムなセッショントークン（英小文字・数字）
pub fn generate_token(length: usize) -> String {
    uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(length)
        .collect()
}
