use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::{Serialize, Deserialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::logging::selection_log::SelectionLog;
use crate::model::advertisement::GeneratedAdvertisement;
use crate::AppState;

/// 广告请求，缺失的字段按空字符串处理
#[derive(Deserialize, Debug, Clone)]
pub struct GenerateAdvertisementRequest {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub marketplace_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdvertisementBody {
    pub id: String,
    pub content_id: String,
    pub marketplace_id: String,
    pub renderable_content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateAdvertisementResponse {
    pub request_id: String,
    pub advertisement: AdvertisementBody,
}

/// **处理广告选择请求**
///
/// 选中广告返回 200，未选中返回 204（无广告可填充）。
pub async fn handle_generate_advertisement(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateAdvertisementRequest>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let customer_id = request.customer_id.unwrap_or_default();
    let marketplace_id = request.marketplace_id.unwrap_or_default();

    let mut selection_log = SelectionLog::new(&request_id, &customer_id, &marketplace_id);
    let start = Instant::now();

    let advertisement = state
        .selection_logic
        .select_advertisement(&customer_id, &marketplace_id);

    selection_log.set_outcome(&advertisement, elapsed_micros(start.elapsed()));
    selection_log.emit();

    match advertisement {
        GeneratedAdvertisement::Content { id, content } => {
            let response = GenerateAdvertisementResponse {
                request_id,
                advertisement: AdvertisementBody {
                    id: id.to_string(),
                    content_id: content.content_id,
                    marketplace_id: content.marketplace_id,
                    renderable_content: content.renderable_content,
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        // 204 - 无广告可填充
        GeneratedAdvertisement::Empty => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn handle_health() -> &'static str {
    "ok"
}

/// 耗时转换为微秒，超出 u64 时取上限
fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
