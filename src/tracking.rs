//! 注文状況（モック）
//!
//! バックエンドがないため、固定の進捗パターンを割り当てて表示する。

use crate::cart::PlacedOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Received,
    Preparing,
    Ready,
    Served,
}

impl TrackingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Received => "received",
            TrackingStatus::Preparing => "preparing",
            TrackingStatus::Ready => "ready",
            TrackingStatus::Served => "served",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackingStatus::Received => "受付済み",
            TrackingStatus::Preparing => "調理中",
            TrackingStatus::Ready => "まもなくお届け",
            TrackingStatus::Served => "提供済み",
        }
    }

    /// 進捗（0.0〜1.0）
    pub fn progress(&self) -> f32 {
        match self {
            TrackingStatus::Received => 0.25,
            TrackingStatus::Preparing => 0.5,
            TrackingStatus::Ready => 0.75,
            TrackingStatus::Served => 1.0,
        }
    }

    /// 残り時間の目安（分）
    pub fn eta_minutes(&self) -> u32 {
        match self {
            TrackingStatus::Received => 15,
            TrackingStatus::Preparing => 10,
            TrackingStatus::Ready => 2,
            TrackingStatus::Served => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEntry {
    pub name: String,
    pub quantity: u32,
    pub status: TrackingStatus,
}

impl TrackingEntry {
    fn new(name: &str, quantity: u32, status: TrackingStatus) -> Self {
        Self { name: name.to_string(), quantity, status }
    }

    pub fn eta_minutes(&self) -> u32 {
        self.status.eta_minutes()
    }
}

const STATUS_PATTERN: [TrackingStatus; 3] = [
    TrackingStatus::Ready,
    TrackingStatus::Preparing,
    TrackingStatus::Received,
];

/// 注文状況の一覧
///
/// 直前の注文があればその行から、なければ固定の一覧を返す。
pub fn tracking_entries(last_order: Option<&PlacedOrder>) -> Vec<TrackingEntry> {
    match last_order {
        Some(order) if !order.lines.is_empty() => order
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let status = STATUS_PATTERN[i % STATUS_PATTERN.len()];
                TrackingEntry::new(&line.item.name, line.quantity, status)
            })
            .collect(),
        _ => vec![
            TrackingEntry::new("Margherita Pizza", 1, TrackingStatus::Served),
            TrackingEntry::new("Caesar Salad", 1, TrackingStatus::Ready),
            TrackingEntry::new("Spaghetti Carbonara", 2, TrackingStatus::Preparing),
            TrackingEntry::new("Cola", 2, TrackingStatus::Received),
        ],
    }
}
