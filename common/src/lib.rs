//! Table Order Common Library
//!
//! 状態管理(table-order)とWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod menu;
pub mod money;
pub mod qr;

pub use types::{CartLine, ItemId, MenuItem, OrderState, TableSession};
pub use menu::{catalog, categories, filter_by_category, find};
pub use money::{format_price, is_representable, line_total, sum_lines};
pub use qr::{QrData, QR_PARAM, format_qr, parse_qr};
