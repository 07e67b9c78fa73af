//! Service information endpoint

use axum::{extract::State, Json};
use tracing::info;

use super::extract::IncomingRequest;
use crate::snapshot::{RequestFacts, ServiceInfo};
use crate::AppState;

/// GET /
///
/// Reports service identity, host, runtime and request details.
/// Logs one line per request.
pub async fn service_info(
    State(state): State<AppState>,
    request: IncomingRequest,
) -> Json<ServiceInfo> {
    info!("Request: {} {}", request.method(), request.path());
    Json(ServiceInfo::collect(&state.start, &request))
}

#[cfg(test)]
mod tests {
    use crate::{build_router, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use devops_info_common::StartTime;
    use tower::util::ServiceExt;
    use tracing_test::traced_test;

    fn request_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
        lines
            .iter()
            .copied()
            .filter(|line| line.contains("Request: "))
            .collect()
    }

    #[tokio::test]
    #[traced_test]
    async fn test_root_logs_one_info_line() {
        let app = build_router(AppState::new(StartTime::now()));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert!(logs_contain("Request: GET /"));
        logs_assert(|lines: &[&str]| {
            let logged = request_lines(lines);
            match logged.as_slice() {
                [line] if line.contains("INFO") => Ok(()),
                other => Err(format!("expected one INFO request line, got {:?}", other)),
            }
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn test_rejected_methods_are_not_logged() {
        let app = build_router(AppState::new(StartTime::now()));

        for method in ["HEAD", "POST"] {
            let request = Request::builder()
                .method(method)
                .uri("/")
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        assert!(!logs_contain("Request: "));
    }
}
