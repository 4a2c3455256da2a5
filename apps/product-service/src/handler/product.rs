//! # 商品ハンドラ
//!
//! 商品カタログの CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /productos` - 商品登録
//! - `GET /productos` - 商品一覧
//! - `GET /productos/{id}` - 商品詳細
//! - `PUT /productos/{id}` - 商品のフィールド一式を置き換え
//! - `DELETE /productos/{id}` - 商品削除
//!
//! UUID として解釈できないパスの ID は、存在しない ID と同じく 404 を返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use coopmarket_domain::product::{Price, Product, ProductId, ProductInput};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::{
   error::{CoreError, PRODUCT_NOT_FOUND},
   usecase::ProductUseCaseImpl,
};

/// 商品 API の共有状態
pub struct ProductState {
   pub usecase: ProductUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 価格が数値でも文字列でもない場合のメッセージ
const PRICE_TYPE_MISMATCH: &str = "precio debe ser un número o una cadena";

/// 商品の登録・置き換えリクエスト
///
/// `precio` は JSON の数値と文字列の両方を受け付ける。数値は `f64` に変換せず、
/// JSON 上の表記のまま検証に渡すため [`RawValue`] で受け取る。
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
   #[serde(rename = "nombre")]
   pub name:       String,
   #[serde(rename = "precio")]
   pub price:      Box<RawValue>,
   #[serde(rename = "categorias")]
   pub categories: Vec<String>,
}

impl ProductRequest {
   /// 未検証の商品入力に変換する
   fn into_input(self) -> Result<ProductInput, CoreError> {
      Ok(ProductInput {
         price:      price_text(&self.price)?,
         name:       self.name,
         categories: self.categories,
      })
   }
}

/// `precio` の生の JSON から価格のテキスト表現を取り出す
///
/// 文字列はデコードした中身、数値は JSON 上の表記をそのまま返す。
fn price_text(raw: &RawValue) -> Result<String, CoreError> {
   let text = raw.get().trim();
   match text.as_bytes().first() {
      Some(b'"') => {
         serde_json::from_str(text).map_err(|e| CoreError::InvalidBody(e.to_string()))
      }
      Some(b'-' | b'0'..=b'9') => Ok(text.to_string()),
      _ => Err(CoreError::InvalidBody(PRICE_TYPE_MISMATCH.to_string())),
   }
}

/// 商品 DTO
#[derive(Debug, Serialize)]
pub struct ProductDto {
   pub id:         ProductId,
   #[serde(rename = "nombre")]
   pub name:       String,
   /// 小数点以下 2 桁の文字列（例: `"6.00"`）
   #[serde(rename = "precio")]
   pub price:      Price,
   #[serde(rename = "categorias")]
   pub categories: Vec<String>,
}

impl From<&Product> for ProductDto {
   fn from(product: &Product) -> Self {
      Self {
         id:         *product.id(),
         name:       product.name().to_string(),
         price:      product.price(),
         categories: product.categories().labels(),
      }
   }
}

/// パスの ID を解釈する
///
/// UUID でない値は存在しない商品として扱う。
fn parse_product_id(raw: &str) -> Result<ProductId, CoreError> {
   raw.parse().map_err(|_| {
      tracing::debug!(raw_id = %raw, "UUID として解釈できない商品 ID");
      CoreError::NotFound(PRODUCT_NOT_FOUND.to_string())
   })
}

// --- ハンドラ ---

/// POST /productos
///
/// 商品を登録する。
///
/// ## レスポンス
///
/// - `201 Created`: 登録された商品
/// - `422 Unprocessable Entity`: 検証エラー、または解釈できないリクエストボディ
pub async fn create_product(
   State(state): State<Arc<ProductState>>,
   payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let Json(req) = payload?;

   let product = state.usecase.create_product(req.into_input()?).await?;

   Ok((StatusCode::CREATED, Json(ProductDto::from(&product))))
}

/// GET /productos
///
/// 全商品を返す。順序に意味はない。
pub async fn list_products(
   State(state): State<Arc<ProductState>>,
) -> Result<impl IntoResponse, CoreError> {
   let products = state.usecase.list_products().await?;

   let items: Vec<ProductDto> = products.iter().map(ProductDto::from).collect();
   Ok((StatusCode::OK, Json(items)))
}

/// GET /productos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 商品
/// - `404 Not Found`: 商品が見つからない
pub async fn get_product(
   State(state): State<Arc<ProductState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
   let id = parse_product_id(&id)?;

   let product = state.usecase.get_product(&id).await?;

   Ok((StatusCode::OK, Json(ProductDto::from(&product))))
}

/// PUT /productos/{id}
///
/// 商品のフィールド一式を置き換える。ID は変わらない。
///
/// ## レスポンス
///
/// - `200 OK`: 置き換え後の商品
/// - `404 Not Found`: 商品が見つからない
/// - `422 Unprocessable Entity`: 検証エラー（存在確認より先に判定する）
///
/// UUID として解釈できない ID はボディの内容に関係なく 404 を返す。
pub async fn update_product(
   State(state): State<Arc<ProductState>>,
   Path(id): Path<String>,
   payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let id = parse_product_id(&id)?;
   let Json(req) = payload?;

   let product = state.usecase.update_product(&id, req.into_input()?).await?;

   Ok((StatusCode::OK, Json(ProductDto::from(&product))))
}

/// DELETE /productos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `404 Not Found`: 商品が見つからない
pub async fn delete_product(
   State(state): State<Arc<ProductState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, CoreError> {
   let id = parse_product_id(&id)?;

   state.usecase.delete_product(&id).await?;

   Ok(StatusCode::NO_CONTENT)
}
