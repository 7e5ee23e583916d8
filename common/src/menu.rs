//! メニューカタログ
//!
//! 固定のメニューデータ。IDはカタログ内で一意。

use crate::types::{ItemId, MenuItem};

fn item(
    id: ItemId,
    name: &str,
    price: f64,
    image: &str,
    categories: &[&str],
    description: &str,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        price,
        image: image.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        description: description.to_string(),
    }
}

lazy_static::lazy_static! {
    static ref CATALOG: Vec<MenuItem> = vec![
        item(1, "Margherita Pizza", 80.0, "/images/margherita.jpg", &["Pizza", "Vegetarian"],
            "トマトソース、モッツァレラ、バジルのクラシックピザ"),
        item(2, "Pepperoni Pizza", 95.0, "/images/pepperoni.jpg", &["Pizza"],
            "ペパロニをたっぷりのせたピザ"),
        item(3, "Spaghetti Carbonara", 75.0, "/images/carbonara.jpg", &["Pasta"],
            "卵黄とパンチェッタのクリーミーなパスタ"),
        item(4, "Caesar Salad", 45.0, "/images/caesar.jpg", &["Salad", "Vegetarian"],
            "ロメインレタスとパルメザンのシーザーサラダ"),
        item(5, "Cola", 20.0, "/images/cola.jpg", &["Drinks"],
            "冷えたコーラ"),
        item(6, "Lemonade", 25.0, "/images/lemonade.jpg", &["Drinks", "Vegetarian"],
            "自家製レモネード"),
        item(7, "Tiramisu", 40.0, "/images/tiramisu.jpg", &["Dessert", "Vegetarian"],
            "マスカルポーネとエスプレッソのティラミス"),
        item(8, "Gelato", 30.0, "/images/gelato.jpg", &["Dessert"],
            "本日のジェラート2種盛り"),
    ];
}

/// 全メニュー
pub fn catalog() -> &'static [MenuItem] {
    &CATALOG
}

/// IDで検索
pub fn find(id: ItemId) -> Option<&'static MenuItem> {
    CATALOG.iter().find(|item| item.id == id)
}

/// カテゴリ一覧（初出順、重複なし）
pub fn categories() -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = Vec::new();
    for label in CATALOG.iter().flat_map(|item| item.categories.iter()) {
        if !labels.contains(&label.as_str()) {
            labels.push(label.as_str());
        }
    }
    labels
}

/// カテゴリで絞り込み
pub fn filter_by_category(label: &str) -> Vec<&'static MenuItem> {
    CATALOG.iter().filter(|item| item.in_category(label)).collect()
}
