//! # CoopMarket インフラ層
//!
//! 商品の保持を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトと、その具体的な実装を提供する。
//! 保持方式の詳細をカプセル化し、ユースケース層を保持方式の変更から保護する。
//!
//! ## 責務
//!
//! - **リポジトリ実装**: 商品ストア（プロセス内メモリ）
//! - **識別子の採番**: 挿入時に一意な商品 ID を発行する
//! - **存在確認**: 存在しない ID の参照を [`InfraErrorKind::NotFound`] として報告する
//!
//! ## 依存関係
//!
//! ```text
//! product-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//!
//! ## 使用例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use coopmarket_infra::repository::{InMemoryProductRepository, ProductRepository};
//!
//! // プロセス起動時に 1 度だけ作成し、ハンドラ間で共有する
//! let repository: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
//! ```

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
