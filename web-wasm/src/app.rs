//! メインアプリケーションコンポーネント

use chrono::Utc;
use leptos::prelude::*;
use table_order::session::{apply_storage_effect, default_providers, SessionContext};
use table_order::{
    apply_and_persist, load_order_state, persist_order_state, AppConfig, Applied, CartAction,
    CartState, PlacedOrder, SessionEffect, SessionManager,
};
use table_order_common::format_price;

use crate::browser::{self, BrowserStorage};
use crate::components::{
    cart_page::CartPage,
    confirmation_page::ConfirmationPage,
    header::Header,
    landing_page::LandingPage,
    loading::Loading,
    menu_page::MenuPage,
    payment_page::PaymentPage,
    tracking_page::TrackingPage,
};

const CONFIG_JSON: &str = include_str!("../config.json");

/// 画面
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Landing,
    Menu,
    Cart,
    Confirmation,
    Tracking,
    Payment,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Landing => "ようこそ",
            View::Menu => "メニュー",
            View::Cart => "カート",
            View::Confirmation => "注文完了",
            View::Tracking => "注文状況",
            View::Payment => "お会計",
        }
    }

    /// テーブルセッションが必要な画面か
    pub fn requires_session(&self) -> bool {
        !matches!(self, View::Landing)
    }
}

/// アプリケーションの状態
///
/// 各画面にはpropsとして明示的に渡す。
#[derive(Clone, Copy)]
pub struct AppState {
    pub cart: RwSignal<CartState>,
    pub session: RwSignal<SessionManager>,
    pub view: RwSignal<View>,
    pub config: StoredValue<AppConfig>,
}

impl AppState {
    fn new() -> Self {
        let config = AppConfig::from_json_or_default(CONFIG_JSON);
        // 注文フラグはリロードをまたいで復元、カートは空から
        let order = load_order_state(&BrowserStorage::open());
        Self {
            cart: RwSignal::new(CartState::with_order_state(order)),
            session: RwSignal::new(SessionManager::new()),
            view: RwSignal::new(View::Menu),
            config: StoredValue::new(config),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.with(|s| s.is_active())
    }

    pub fn navigate(&self, view: View) {
        self.view.set(view);
    }

    pub fn price(&self, amount: f64) -> String {
        self.config
            .with_value(|c| format_price(&c.currency_symbol, amount))
    }

    /// カート操作を適用し、注文フラグが変わったら保存
    pub fn dispatch(&self, action: CartAction) -> Applied {
        self.cart
            .try_update(|cart| apply_and_persist(cart, &mut BrowserStorage::open(), action))
            .unwrap_or(Applied::Ignored)
    }

    /// 注文を確定して保存
    pub fn place_order(&self) -> Option<PlacedOrder> {
        let receipt = self.cart.try_update(|cart| cart.place_order());
        self.persist_order();
        receipt
    }

    fn persist_order(&self) {
        let order = self.cart.with_untracked(|cart| cart.order_state());
        persist_order_state(&mut BrowserStorage::open(), &order);
    }

    /// ストレージ → QR → モック生成 の順でセッションを開始
    pub fn start_session(&self) {
        if self.session.with_untracked(|s| s.is_active()) {
            return;
        }
        let config = self.config.get_value();
        let providers = default_providers(&config);
        let store = BrowserStorage::open();
        let qr = browser::qr_param();
        let ctx = SessionContext {
            store: &store,
            qr_param: qr.as_deref(),
            now: Utc::now(),
        };
        let effects = self
            .session
            .try_update(|s| s.initialize(&providers, &ctx))
            .unwrap_or_default();
        self.run_session_effects(effects);
    }

    /// セッション終了（未払いの注文はそのまま残す）
    pub fn end_session(&self) {
        let effects = self
            .session
            .try_update(|s| s.end_session())
            .unwrap_or_default();
        self.run_session_effects(effects);
    }

    fn run_session_effects(&self, effects: Vec<SessionEffect>) {
        let mut store = BrowserStorage::open();
        for effect in effects {
            match apply_storage_effect(&mut store, &effect) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    log::warn!("セッションの保存に失敗: {}", e);
                    continue;
                }
            }
            match effect {
                SessionEffect::RewriteUrl { qr } => browser::set_qr_param(&qr),
                SessionEffect::StripQrParam => browser::strip_qr_param(),
                SessionEffect::NavigateLanding => self.navigate(View::Landing),
                SessionEffect::Persist(_) | SessionEffect::RemoveStored => {}
            }
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    // マウント後にセッションを解決。それまでは読み込み中を表示
    Effect::new(move |_| state.start_session());

    view! {
        <div class="container">
            <Header state=state />

            <main class="page">
                {move || {
                    let view = state.view.get();
                    if view.requires_session() && !state.is_active() {
                        return view! { <Loading /> }.into_any();
                    }
                    match view {
                        View::Landing => view! { <LandingPage state=state /> }.into_any(),
                        View::Menu => view! { <MenuPage state=state /> }.into_any(),
                        View::Cart => view! { <CartPage state=state /> }.into_any(),
                        View::Confirmation => view! { <ConfirmationPage state=state /> }.into_any(),
                        View::Tracking => view! { <TrackingPage state=state /> }.into_any(),
                        View::Payment => view! { <PaymentPage state=state /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
