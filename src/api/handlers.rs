use crate::error::SettleError;
use crate::export::{build_tables, write_bundle};
use crate::models::{Catalog, MatchedItem, ReportInput, ReviewException};
use crate::service::{parse_priority_list, SettlementOutcome, SettlementService};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SettlementService>,
    pub export_dir: PathBuf,
}

/// 请求体: 抽取
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub catalog: Catalog,
    pub reports: Vec<ReportInput>,
}

/// 请求体: 结算; 代收名单可给列表或原始文本
#[derive(Debug, Deserialize)]
pub struct SettleRequest {
    pub catalog: Catalog,
    pub reports: Vec<ReportInput>,
    #[serde(default)]
    pub priority_collectors: Vec<String>,
    #[serde(default)]
    pub priority_text: Option<String>,
}

impl SettleRequest {
    fn priority(&self) -> Vec<String> {
        let mut list = self.priority_collectors.clone();
        if let Some(text) = &self.priority_text {
            list.extend(parse_priority_list(text));
        }
        list
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub message: String,
    pub matched: Vec<MatchedItem>,
    pub exceptions: Vec<ReviewException>,
}

#[derive(Debug, Serialize)]
pub struct SettleResponse {
    pub success: bool,
    pub message: String,
    pub outcome: Option<SettlementOutcome>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub message: String,
    pub files: Vec<String>,
}

fn reject(status: StatusCode, message: String) -> Response {
    let response = SettleResponse {
        success: false,
        message,
        outcome: None,
    };
    (status, Json(response)).into_response()
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 抽取接口: 只返回计价明细与异常
pub async fn extract(State(state): State<AppState>, Json(req): Json<ExtractRequest>) -> Response {
    if req.catalog.is_empty() {
        return reject(StatusCode::BAD_REQUEST, SettleError::EmptyCatalog.to_string());
    }
    let report_count = req.reports.len();
    let service = state.service.clone();
    // 批量抽取走 rayon, 放到阻塞线程池, 不占用异步 worker
    let joined =
        tokio::task::spawn_blocking(move || service.extract(&req.catalog, &req.reports)).await;
    let outcome = match joined {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("抽取任务失败: {}", e);
            return reject(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e));
        }
    };
    let response = ExtractResponse {
        success: true,
        message: format!(
            "Extracted {} reports: {} items, {} exceptions",
            report_count,
            outcome.matched.len(),
            outcome.exceptions.len()
        ),
        matched: outcome.matched,
        exceptions: outcome.exceptions,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 结算接口: 抽取 + 汇总 + 封顶分配
pub async fn settle(State(state): State<AppState>, Json(req): Json<SettleRequest>) -> Response {
    if req.catalog.is_empty() {
        return reject(StatusCode::BAD_REQUEST, SettleError::EmptyCatalog.to_string());
    }
    let report_count = req.reports.len();
    let service = state.service.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let priority = req.priority();
        service.settle(&req.catalog, &req.reports, &priority)
    })
    .await;
    let outcome = match joined {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("结算任务失败: {}", e);
            return reject(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e));
        }
    };
    let response = SettleResponse {
        success: true,
        message: format!(
            "Settled {} reports, {} accounts, {} transfers",
            report_count,
            outcome.allocation.rows.len(),
            outcome.allocation.transfers.len()
        ),
        outcome: Some(outcome),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// 结算并导出 CSV 到 `<export_dir>/<时间戳>/`
pub async fn settle_export(
    State(state): State<AppState>,
    Json(req): Json<SettleRequest>,
) -> Response {
    if req.catalog.is_empty() {
        return reject(StatusCode::BAD_REQUEST, SettleError::EmptyCatalog.to_string());
    }
    let service = state.service.clone();
    let dir = state
        .export_dir
        .join(Local::now().format("%Y%m%d_%H%M%S").to_string());
    let target = dir.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let priority = req.priority();
        let outcome = service.settle(&req.catalog, &req.reports, &priority);
        let tables = build_tables(&outcome, &req.catalog);
        write_bundle(&target, &tables)
    })
    .await;

    let written = match joined {
        Ok(written) => written,
        Err(e) => Err(SettleError::Io(e.to_string())),
    };
    match written {
        Ok(paths) => {
            let response = ExportResponse {
                success: true,
                message: format!("Exported {} tables to {}", paths.len(), dir.display()),
                files: paths.iter().map(|p| p.display().to_string()).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!("导出失败: {}", e);
            let response = ExportResponse {
                success: false,
                message: format!("Error: {}", e),
                files: Vec::new(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
