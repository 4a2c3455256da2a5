//! # ユースケース層
//!
//! Product Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、検証とストア操作の組み立てはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `product`: 商品の登録・参照・更新・削除

pub mod product;

pub use product::ProductUseCaseImpl;
