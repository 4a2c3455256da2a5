//! # Product Service ライブラリ
//!
//! 商品カタログ API のユースケース、ハンドラ、ルーター構築を公開する。
//! 結合テストから実際のルーターを組み立てられるよう、バイナリとは分離している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
