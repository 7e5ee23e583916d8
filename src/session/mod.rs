//! テーブルセッション管理
//!
//! 状態: Uninitialized → Active → Ended
//!
//! 状態遷移はストレージやURLに直接触らず、必要な副作用を
//! `SessionEffect` のリストとして返す。ストレージ分は
//! `apply_storage_effect`、URL・画面遷移はWeb側が処理する。

pub mod provider;

pub use provider::{
    default_providers, generate_token, resolve, GeneratedSessionProvider, QrSessionProvider,
    SessionContext, SessionProvider, SessionSource, StoredSessionProvider,
};

use crate::error::Result;
use crate::storage::{keys, KeyValueStore};
use table_order_common::{format_qr, QrData, TableSession};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    Uninitialized,
    Active(TableSession),
    Ended,
}

/// 状態遷移に伴う副作用
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// `tableSession` に保存
    Persist(TableSession),
    /// `tableSession` だけを削除（注文フラグは残す）
    RemoveStored,
    /// URLの `qr` パラメータをこの値に書き換え
    RewriteUrl { qr: String },
    /// URLから `qr` パラメータを除去
    StripQrParam,
    /// トップ画面へ
    NavigateLanding,
}

#[derive(Debug, Clone)]
pub struct SessionManager {
    phase: SessionPhase,
    source: Option<SessionSource>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            source: None,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn source(&self) -> Option<SessionSource> {
        self.source
    }

    pub fn session(&self) -> Option<&TableSession> {
        match &self.phase {
            SessionPhase::Active(session) => Some(session),
            _ => None,
        }
    }

    /// テーブルIDとセッション情報が揃っているか
    pub fn is_active(&self) -> bool {
        self.session().is_some_and(TableSession::is_complete)
    }

    /// プロバイダを順に試してセッションを開始
    ///
    /// すでに Active の場合は何もしない。
    pub fn initialize(
        &mut self,
        providers: &[Box<dyn SessionProvider>],
        ctx: &SessionContext<'_>,
    ) -> Vec<SessionEffect> {
        if self.is_active() {
            return Vec::new();
        }

        let Some((session, source)) = resolve(providers, ctx) else {
            log::warn!("セッションを解決できませんでした");
            return Vec::new();
        };

        log::info!(
            "セッション開始 ({}): business={} table={}",
            source.as_str(),
            session.business_id,
            session.table_id
        );

        let mut effects = Vec::new();
        if source.should_persist() {
            effects.push(SessionEffect::Persist(session.clone()));
        }
        if source.should_rewrite_url() {
            effects.push(SessionEffect::RewriteUrl {
                qr: qr_value(&session),
            });
        }

        self.phase = SessionPhase::Active(session);
        self.source = Some(source);
        effects
    }

    /// セッションを終了（注文フラグには触らない）
    pub fn end_session(&mut self) -> Vec<SessionEffect> {
        if let Some(session) = self.session() {
            log::info!("セッション終了: table={}", session.table_id);
        }
        self.phase = SessionPhase::Ended;
        self.source = None;
        vec![
            SessionEffect::RemoveStored,
            SessionEffect::StripQrParam,
            SessionEffect::NavigateLanding,
        ]
    }
}

/// セッションに対応する `qr` の値
pub fn qr_value(session: &TableSession) -> String {
    format_qr(&QrData {
        business_id: session.business_id.clone(),
        table_id: session.table_id.clone(),
        session_token: session.session_token.clone(),
    })
}

/// ストレージに関わる副作用を実行
///
/// ストレージ以外の副作用なら false を返す。
pub fn apply_storage_effect(store: &mut dyn KeyValueStore, effect: &SessionEffect) -> Result<bool> {
    match effect {
        SessionEffect::Persist(session) => {
            let json = serde_json::to_string(session)?;
            store.set(keys::TABLE_SESSION, &json)?;
            Ok(true)
        }
        SessionEffect::RemoveStored => {
            store.remove(keys::TABLE_SESSION)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
