//! # CoopMarket ドメイン層
//!
//! 協同組合の商品カタログを構成するドメインモデルと検証ルールを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 生成時に検証し、不正な値の存在を型レベルで排除する
//!   （例: [`ProductName`](product::ProductName), [`Price`](product::Price)）
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: [`Product`](product::Product)）
//! - **検証エラー**: どのフィールドのどのルールに違反したかを列挙型で表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! product-service → infra → domain
//! ```
//!
//! ドメイン層は I/O を一切持たない純粋な層であり、インフラ層には依存しない。
//!
//! ## モジュール構成
//!
//! - [`category`] - 固定のカテゴリカタログ
//! - [`error`] - 検証エラーの定義
//! - [`product`] - 商品エンティティと入力検証
//!
//! ## 使用例
//!
//! ```rust
//! use coopmarket_domain::product::{ProductInput, validate};
//!
//! let draft = validate(ProductInput {
//!     name:       "Miel de abeja".to_string(),
//!     price:      "5.999".to_string(),
//!     categories: vec!["Organicos".to_string(), "OFERTAS".to_string()],
//! })
//! .unwrap();
//!
//! assert_eq!(draft.price().to_string(), "6.00");
//! ```

#[macro_use]
mod macros;

pub mod category;
pub mod error;
pub mod product;

pub use error::{ValidationError, ValidationErrors};
