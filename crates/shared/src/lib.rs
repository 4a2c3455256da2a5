//! # CoopMarket 共有ユーティリティ
//!
//! このクレートは、CoopMarket のサービス群で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, サービス）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（トレーシング関連は `observability` feature の背後）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, FieldErrorDetail};
pub use health::HealthResponse;
