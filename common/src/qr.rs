//! QRコードパラメータ
//!
//! URLクエリ `qr` の値は `businessId_tableId_sessionToken` 形式。

use serde::{Deserialize, Serialize};

/// URLクエリパラメータ名
pub const QR_PARAM: &str = "qr";

const SEPARATOR: char = '_';

/// QRパラメータの中身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrData {
    pub business_id: String,
    pub table_id: String,
    pub session_token: String,
}

/// `qr` の値をパース
///
/// ちょうど3つの空でない要素でなければ None（QRデータなしとして扱う）
pub fn parse_qr(value: &str) -> Option<QrData> {
    let parts: Vec<&str> = value.trim().split(SEPARATOR).collect();
    match parts.as_slice() {
        [business, table, token]
            if !business.is_empty() && !table.is_empty() && !token.is_empty() =>
        {
            Some(QrData {
                business_id: business.to_string(),
                table_id: table.to_string(),
                session_token: token.to_string(),
            })
        }
        _ => None,
    }
}

/// `qr` の値を組み立て
pub fn format_qr(data: &QrData) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        data.business_id,
        data.table_id,
        data.session_token,
        sep = SEPARATOR
    )
}
