use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableOrderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ストレージが利用できません: {0}")]
    StorageUnavailable(String),

    #[error("ストレージへの書き込みに失敗: {0}")]
    StorageWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableOrderError>;
