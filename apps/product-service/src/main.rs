//! # Product Service サーバー
//!
//! 協同組合の商品カタログを管理する HTTP サーバー。
//! 商品はプロセス内メモリにのみ保持し、再起動すると失われる。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p coopmarket-product-service
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PRODUCT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PRODUCT_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,coopmarket=debug`） |

use std::sync::Arc;

use coopmarket_infra::repository::InMemoryProductRepository;
use coopmarket_product_service::{app_builder::build_app, config::ProductServiceConfig};
use coopmarket_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("product-service"));
    let _tracing_guard = tracing::info_span!("app", service = "product-service").entered();

    let config = ProductServiceConfig::from_env()?;

    let app = build_app(Arc::new(InMemoryProductRepository::new()));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Product Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Product Service サーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
///
/// シグナルハンドラの登録に失敗した場合はそのシグナルを待たない。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
