//! テーブルセッションのテスト
//!
//! 優先順位（ストレージ → QR → 生成）と終了時の挙動を検証

use chrono::{TimeZone, Utc};
use table_order::common::{OrderState, TableSession};
use table_order::session::{
    apply_storage_effect, default_providers, SessionContext, SessionEffect, SessionSource,
};
use table_order::storage::keys;
use table_order::{
    load_order_state, save_order_state, AppConfig, KeyValueStore, MemoryStore, SessionManager,
};

fn stored_session() -> TableSession {
    TableSession {
        table_id: "12".into(),
        business_id: "3".into(),
        session_token: "stored99".into(),
        started_at: Utc.with_ymd_and_hms(2025, 1, 18, 9, 0, 0).unwrap(),
    }
}

fn start(
    manager: &mut SessionManager,
    store: &mut MemoryStore,
    qr: Option<&str>,
) -> Vec<SessionEffect> {
    let providers = default_providers(&AppConfig::default());
    let effects = {
        let ctx = SessionContext {
            store: &*store,
            qr_param: qr,
            now: Utc.with_ymd_and_hms(2025, 1, 18, 12, 0, 0).unwrap(),
        };
        manager.initialize(&providers, &ctx)
    };
    for effect in &effects {
        apply_storage_effect(&mut *store, effect).expect("ストレージ書き込み失敗");
    }
    effects
}

/// ストレージとQRの両方がある場合はストレージが優先
#[test]
fn test_stored_session_wins_over_qr() {
    let json = serde_json::to_string(&stored_session()).unwrap();
    let mut store = MemoryStore::new().with_entry(keys::TABLE_SESSION, &json);
    let mut manager = SessionManager::new();

    let effects = start(&mut manager, &mut store, Some("1_5_abc123"));

    assert!(effects.is_empty());
    assert_eq!(manager.source(), Some(SessionSource::Stored));
    assert_eq!(manager.session(), Some(&stored_session()));
}

/// 初回アクセスで `qr=1_5_abc123`
#[test]
fn test_first_load_with_qr() {
    let mut store = MemoryStore::new();
    let mut manager = SessionManager::new();

    start(&mut manager, &mut store, Some("1_5_abc123"));

    assert!(manager.is_active());
    let session = manager.session().expect("Active");
    assert_eq!(session.table_id, "5");
    assert_eq!(session.business_id, "1");
    assert_eq!(session.session_token, "abc123");

    // 保存されている
    let saved: TableSession =
        serde_json::from_str(&store.get(keys::TABLE_SESSION).expect("保存なし")).unwrap();
    assert_eq!(&saved, session);
}

/// 不正なQRはモックセッションへフォールバック
#[test]
fn test_malformed_qr_falls_back_to_generated() {
    let mut store = MemoryStore::new();
    let mut manager = SessionManager::new();

    let effects = start(&mut manager, &mut store, Some("not-a-qr"));

    assert!(manager.is_active());
    assert_eq!(manager.source(), Some(SessionSource::Generated));
    let session = manager.session().unwrap();
    assert_eq!(session.table_id, "1");
    assert_eq!(session.session_token.len(), 9);
    assert!(effects.iter().any(|e| matches!(e, SessionEffect::RewriteUrl { .. })));
    assert!(store.contains(keys::TABLE_SESSION));
}

/// セッション終了は注文フラグを残す
#[test]
fn test_end_session_preserves_order_flags() {
    let mut store = MemoryStore::new();
    let mut manager = SessionManager::new();
    start(&mut manager, &mut store, Some("1_5_abc123"));

    let order = OrderState { has_ordered: true, order_total: 120.0, is_paid: false };
    save_order_state(&mut store, &order).unwrap();

    for effect in manager.end_session() {
        apply_storage_effect(&mut store, &effect).unwrap();
    }

    assert!(!manager.is_active());
    assert!(manager.session().is_none());
    assert!(!store.contains(keys::TABLE_SESSION));
    assert_eq!(load_order_state(&store), order);
}

/// リロード後は保存済みセッションで再開
#[test]
fn test_reload_restores_session() {
    let mut store = MemoryStore::new();
    let mut first = SessionManager::new();
    start(&mut first, &mut store, None);
    let token = first.session().unwrap().session_token.clone();

    let mut second = SessionManager::new();
    let effects = start(&mut second, &mut store, None);

    assert!(effects.is_empty());
    assert_eq!(second.source(), Some(SessionSource::Stored));
    assert_eq!(second.session().unwrap().session_token, token);
}
