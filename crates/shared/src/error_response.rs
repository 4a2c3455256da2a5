//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! 全サービスで共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除
//! - フィールド単位の検証エラーは拡張メンバー `errors` に格納する（RFC 9457 §3.2）

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://coopmarket.example.com/errors";

/// フィールド単位の検証エラー詳細
///
/// `values` はカタログ外カテゴリなど、違反の原因となった値を列挙する場合のみ設定する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorDetail {
   pub field:   String,
   pub code:    String,
   pub message: String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub values:  Option<Vec<String>>,
}

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// すべてのサービスで統一されたエラーレスポンス形式。
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
   #[serde(default, skip_serializing_if = "Vec::is_empty")]
   pub errors:     Vec<FieldErrorDetail>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// サービス固有のエラー種別を作成する場合に使用する。
   /// `error_type_suffix` はベース URI に付加される（例: `"invalid-request-body"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
         errors: Vec::new(),
      }
   }

   /// フィールド単位のエラー詳細を付与する
   pub fn with_errors(mut self, errors: Vec<FieldErrorDetail>) -> Self {
      self.errors = errors;
      self
   }

   /// 404 Not Found
   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new("not-found", "Not Found", 404, detail)
   }

   /// 422 Validation Error
   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new("validation-error", "Validation Error", 422, detail)
   }

   /// 422 リクエストボディの形式不正（JSON 構文エラー、必須フィールド欠落など）
   pub fn invalid_request_body(detail: impl Into<String>) -> Self {
      Self::new("invalid-request-body", "Invalid Request Body", 422, detail)
   }
}
