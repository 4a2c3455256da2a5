//! # Product Service エラー定義
//!
//! Product Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `NotFound` | 404 Not Found |
//! | `Validation` | 422 Unprocessable Entity |
//! | `InvalidBody` | 422 Unprocessable Entity |

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use coopmarket_domain::ValidationErrors;
use coopmarket_infra::{InfraError, InfraErrorKind};
use coopmarket_shared::{ErrorResponse, FieldErrorDetail};
use thiserror::Error;

/// 商品が見つからない場合のメッセージ
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Product Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// リソースが見つからない（存在しない ID、UUID として不正な ID を含む）
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 入力値の検証失敗
   #[error("検証エラー: {0}")]
   Validation(#[from] ValidationErrors),

   /// リクエストボディを解釈できない
   #[error("不正なリクエストボディ: {0}")]
   InvalidBody(String),
}

impl From<InfraError> for CoreError {
   fn from(error: InfraError) -> Self {
      match error.kind() {
         InfraErrorKind::NotFound { entity, id } => {
            tracing::debug!(%entity, %id, "エンティティが見つかりません");
            CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
         }
      }
   }
}

impl From<JsonRejection> for CoreError {
   fn from(rejection: JsonRejection) -> Self {
      CoreError::InvalidBody(rejection.body_text())
   }
}

/// 検証エラーをフィールド単位の詳細に変換する
fn field_errors(errors: &ValidationErrors) -> Vec<FieldErrorDetail> {
   errors
      .iter()
      .map(|e| FieldErrorDetail {
         field:   e.field().to_string(),
         code:    e.code().to_string(),
         message: e.to_string(),
         values:  e.offending_values(),
      })
      .collect()
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      let body = match &self {
         CoreError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
         CoreError::Validation(errors) => {
            ErrorResponse::validation_error(errors.first().to_string())
               .with_errors(field_errors(errors))
         }
         CoreError::InvalidBody(msg) => ErrorResponse::invalid_request_body(msg.clone()),
      };

      let status =
         StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}
