//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **依存性注入**: ユースケースは `Arc<dyn ProductRepository>` として受け取る
//! - **テスタビリティ**: テストごとに新しいインスタンスを作成でき、状態が分離される

pub mod product_repository;

pub use product_repository::{InMemoryProductRepository, ProductRepository};
