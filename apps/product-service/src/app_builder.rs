//! # Product Service アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use coopmarket_infra::repository::ProductRepository;
use coopmarket_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ProductState,
        create_product,
        delete_product,
        get_product,
        health_check,
        list_allowed_categories,
        list_products,
        update_product,
    },
    usecase::ProductUseCaseImpl,
};

/// DI コンテナの構築とルーター定義を行う
///
/// リポジトリ → ユースケース → State → Router の順に組み立てる。
/// テストでは任意のリポジトリを渡して同じルーターを構築できる。
pub fn build_app(product_repository: Arc<dyn ProductRepository>) -> Router {
    let product_state = Arc::new(ProductState {
        usecase: ProductUseCaseImpl::new(product_repository),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/categorias-permitidas", get(list_allowed_categories))
        .route("/productos", post(create_product).get(list_products))
        .route(
            "/productos/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(product_state)
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（クライアント提供値があればそれを使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
