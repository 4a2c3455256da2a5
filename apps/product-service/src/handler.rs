//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とストア操作はユースケースに委譲

pub mod category;
pub mod health;
pub mod product;

pub use category::list_allowed_categories;
pub use health::health_check;
pub use product::{
    ProductState,
    create_product,
    delete_product,
    get_product,
    list_products,
    update_product,
};
