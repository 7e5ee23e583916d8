//! Table Order
//!
//! QRテーブルオーダーの状態管理:
//! - cart: カート行と注文フラグのリデューサ
//! - order_status: 注文フラグの永続化
//! - session: テーブルセッション（ストレージ → QR → モック生成）
//! - payment: 請求額の算出
//! - tracking: 注文状況（モック）

pub mod cart;
pub mod config;
pub mod error;
pub mod order_status;
pub mod payment;
pub mod session;
pub mod storage;
pub mod tracking;

pub use cart::{Applied, CartAction, CartState, PlacedOrder};
pub use config::AppConfig;
pub use error::{Result, TableOrderError};
pub use order_status::{apply_and_persist, load_order_state, persist_order_state, save_order_state};
pub use payment::PaymentSummary;
pub use session::{SessionEffect, SessionManager, SessionPhase};
pub use storage::{KeyValueStore, MemoryStore};
pub use tracking::{tracking_entries, TrackingEntry, TrackingStatus};
pub use table_order_common as common;
