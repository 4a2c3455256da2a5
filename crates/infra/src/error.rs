//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーとの分離**: 入力検証エラーはドメイン層、存在しない ID の参照はインフラ層
//! - **ログ可能性**: Debug によりログ出力時に詳細情報を表示
//! - **SpanTrace 自動捕捉**: convenience constructor でエラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// convenience constructor でエラーを生成すると、その時点のスパン情報が自動的にキャプチャされる。
///
/// ## パターンマッチ
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```
/// use coopmarket_infra::{InfraError, InfraErrorKind};
///
/// let error = InfraError::not_found("Product", "0190a3c2-0000-7000-8000-000000000000");
/// assert!(matches!(error.kind(), InfraErrorKind::NotFound { .. }));
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// 指定された ID のエンティティが存在しない
    ///
    /// 置き換え・取得・削除で発生する。呼び出し元が正しい ID を指定すれば回復できる。
    #[error("{entity} が見つかりません: {id}")]
    NotFound {
        /// エンティティ名（例: "Product"）
        entity: &'static str,
        /// 参照に使用した ID
        id:     String,
    },
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// NotFound の場合 true
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, InfraErrorKind::NotFound { .. })
    }

    // ===== Convenience constructors =====

    /// エンティティ不在エラーを生成する
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::NotFound {
                entity,
                id: id.into(),
            },
            span_trace: SpanTrace::capture(),
        }
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
