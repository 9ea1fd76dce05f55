//! Axum route handlers for the HTML pages.

use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use tracing::{debug, info};

use crate::bio::composer::generate_bios;
use crate::bio::models::BioRequestBody;
use crate::state::AppState;
use crate::ui::page::render_page;
use crate::ui::session::{FormSession, Outcome};

/// Raw form fields. Everything is optional so a missing field surfaces as a
/// validation message instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct BioForm {
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "type")]
    pub bio_type: String,
    #[serde(default)]
    pub tone: String,
    /// Checkbox: present when ticked, absent otherwise.
    #[serde(default)]
    pub emojis: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub temperature: String,
}

impl From<BioForm> for BioRequestBody {
    fn from(form: BioForm) -> Self {
        BioRequestBody {
            content: form.content,
            bio_type: form.bio_type,
            tone: form.tone,
            emojis: form
                .emojis
                .is_some_and(|v| matches!(v.as_str(), "true" | "on")),
            model: form.model,
            // unparseable input fails the temperature range check
            temperature: form.temperature.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormSession::new()))
}

/// POST /generate
///
/// Runs one submission for a fresh form session and renders the result.
/// Failures are logged and the form comes back idle with no extra message.
pub async fn handle_generate_form(
    State(state): State<AppState>,
    Form(form): Form<BioForm>,
) -> (StatusCode, Html<String>) {
    let mut session = FormSession::new();

    let status = match session.begin_submit(form.into()) {
        Ok(request) => {
            let result =
                generate_bios(state.llm.as_ref(), &request, state.config.max_tokens).await;
            if session.finish(result) == Outcome::Success {
                info!("Rendered generated bios");
            }
            StatusCode::OK
        }
        // a fresh session is never in flight, so only invalid input lands here
        Err(rejected) => {
            debug!("Form submission rejected: {rejected}");
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    (status, Html(render_page(&session)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::testing::{bios_json, FakeBackend};

    const CONTENT: &str = "Street photographer documenting night markets across Southeast Asia.";

    fn app(backend: Arc<FakeBackend>) -> axum::Router {
        build_router(AppState {
            llm: backend,
            config: Config::for_tests("http://unused.invalid"),
        })
    }

    fn form_body(content: &str, extra: &str) -> String {
        let content: String = content
            .chars()
            .map(|c| if c == ' ' { '+' } else { c })
            .collect();
        format!("content={content}&type=brand&tone=casual&model=llama3-8b-8192&temperature=0.6{extra}")
    }

    async fn post_form(app: axum::Router, body: String) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_form_conversion() {
        let body: BioRequestBody = BioForm {
            content: CONTENT.to_string(),
            bio_type: "brand".to_string(),
            tone: "casual".to_string(),
            emojis: Some("true".to_string()),
            model: "llama3-8b-8192".to_string(),
            temperature: " 1.5 ".to_string(),
        }
        .into();
        assert!(body.emojis);
        assert_eq!(body.temperature, 1.5);

        let unchecked: BioRequestBody = BioForm::default().into();
        assert!(!unchecked.emojis);
        assert!(unchecked.temperature.is_nan());
    }

    #[tokio::test]
    async fn test_index_renders_idle_form() {
        let response = app(Arc::new(FakeBackend::failing()))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Customize Your Bio"));
        assert!(html.contains("Generate Bio</button>"));
    }

    #[tokio::test]
    async fn test_successful_submission_renders_bios() {
        let backend = Arc::new(FakeBackend::replying(bios_json(4, 90)));
        let response = post_form(app(backend.clone()), form_body(CONTENT, "&emojis=true")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert_eq!(html.matches("data-copy-index=").count(), 4);
        assert!(html.contains(CONTENT));
        assert!(html.contains(r#"<option value="brand" selected>Brand</option>"#));

        let sent = backend.last_request().unwrap();
        assert_eq!(sent.temperature, 0.6);
        assert!(sent.prompt.contains("Add Emojis: true,"));
    }

    #[tokio::test]
    async fn test_short_content_is_rejected_without_network_call() {
        let backend = Arc::new(FakeBackend::replying(bios_json(4, 90)));
        let response = post_form(app(backend.clone()), form_body("Just me.", "")).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let html = body_text(response).await;
        assert!(html.contains("Describe yourself in at least 50 characters"));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_generation_returns_idle_form_silently() {
        let backend = Arc::new(FakeBackend::failing());
        let response = post_form(app(backend.clone()), form_body(CONTENT, "")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains(r#"<div id="bio-output"></div>"#));
        assert!(html.contains("Generate Bio</button>"));
        assert!(!html.contains("Rate limit"));
        assert_eq!(backend.calls(), 1);
    }
}
