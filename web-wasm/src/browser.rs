//! ブラウザAPI（localStorage・URL）

use table_order::storage::KeyValueStore;
use table_order::{Result, TableOrderError};
use table_order_common::QR_PARAM;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Url};

/// localStorage をラップしたストア
///
/// localStorage が使えない環境（プライベートモード等）では
/// 読み込みは常に None、書き込みはエラーになる。
pub struct BrowserStorage {
    inner: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage が利用できません");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| TableOrderError::StorageUnavailable("localStorage".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| TableOrderError::StorageWrite(js_error(&e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| TableOrderError::StorageWrite(js_error(&e)))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn current_url() -> Option<Url> {
    let href = web_sys::window()?.location().href().ok()?;
    Url::new(&href).ok()
}

fn replace_url(url: &Url) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url.href())));
    if let Err(e) = result {
        log::warn!("URLの書き換えに失敗: {}", js_error(&e));
    }
}

/// URLクエリの `qr` の値
pub fn qr_param() -> Option<String> {
    current_url()?.search_params().get(QR_PARAM)
}

/// `qr` を書き換え（履歴は増やさない）
pub fn set_qr_param(value: &str) {
    if let Some(url) = current_url() {
        url.search_params().set(QR_PARAM, value);
        replace_url(&url);
    }
}

/// `qr` を除去
pub fn strip_qr_param() {
    if let Some(url) = current_url() {
        url.search_params().delete(QR_PARAM);
        replace_url(&url);
    }
}
