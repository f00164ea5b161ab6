use std::sync::Arc;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use tokio::net::TcpListener;
use crate::errors::PresenterError;
use crate::input::{collect_sample, SampleForm};
use crate::manager_model::Regressor;
use crate::predictor::{run_prediction, Outcome};
use crate::presenter::Presenter;

/// Everything a request needs, built once at startup and shared read only
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Regressor>,
    pub presenter: Arc<Presenter>,
}

impl IntoResponse for PresenterError {
    fn into_response(self) -> Response {
        error!("failed to render page: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
    }
}

/// Builds the router serving the prediction page
///
/// # Arguments
///
/// * 'state' - loaded model and presenter
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(state)
}

/// Renders the page for the current form state without asking the model
pub async fn index(State(state): State<AppState>, Query(form): Query<SampleForm>)
    -> Result<Html<String>, PresenterError> {

    let sample = collect_sample(&form);

    Ok(Html(state.presenter.render(&sample, &Outcome::NotRequested)?))
}

/// Renders the page for the submitted form state including a prediction
pub async fn predict(State(state): State<AppState>, Form(form): Form<SampleForm>)
    -> Result<Html<String>, PresenterError> {

    let sample = collect_sample(&form);
    let outcome = run_prediction(state.model.as_ref(), &sample);

    Ok(Html(state.presenter.render(&sample, &outcome)?))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}

/// Binds the listener and serves requests until Ctrl+C
///
/// # Arguments
///
/// * 'state' - loaded model and presenter
/// * 'bind_addr' - address and port to listen on
pub async fn serve(state: AppState, bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Page;
    use crate::predictor::stubs::{FailingModel, RecordingModel};
    use std::sync::atomic::Ordering;

    fn state_with(model: Arc<dyn Regressor>) -> AppState {
        AppState { model, presenter: Arc::new(Presenter::new(Page::default()).unwrap()) }
    }

    #[tokio::test]
    async fn page_load_does_not_call_model() {
        let model = Arc::new(RecordingModel::new(0.5));
        let state = state_with(model.clone());

        let Html(html) = index(State(state), Query(SampleForm::default())).await.unwrap();

        assert_eq!(model.calls(), 0);
        assert!(html.contains("<td>1012</td>"));
        assert!(!html.contains("Predicted Energy"));
    }

    #[tokio::test]
    async fn editing_fields_does_not_call_model() {
        let model = Arc::new(RecordingModel::new(0.5));
        let state = state_with(model.clone());

        for pressure in ["1000", "1001", "1002.5"] {
            let form = SampleForm { pressure: Some(pressure.to_string()), ..Default::default() };
            let Html(html) = index(State(state.clone()), Query(form)).await.unwrap();
            assert!(html.contains(&format!(r#"value="{}""#, pressure)));
            assert!(html.contains(&format!("<td>{}</td>", pressure)));
        }

        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn trigger_calls_model_once_with_defaults() {
        let model = Arc::new(RecordingModel::new(0.5));
        let state = state_with(model.clone());

        let Html(html) = predict(State(state), Form(SampleForm::default())).await.unwrap();

        assert_eq!(model.calls(), 1);
        assert_eq!(model.rows.lock().unwrap()[0], vec![1012.0, 350.0, 28.0, 24.0, 32.0, 5.0, 180.0]);
        assert!(html.contains("0.5000"));
    }

    #[tokio::test]
    async fn failing_model_renders_error_and_keeps_serving() {
        let model = Arc::new(FailingModel::default());
        let state = state_with(model.clone());

        let Html(html) = predict(State(state.clone()), Form(SampleForm::default())).await.unwrap();
        assert!(html.contains("Prediction failed"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);

        let Html(html) = index(State(state), Query(SampleForm::default())).await.unwrap();
        assert!(html.contains("Input Weather Summary"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sessions_share_the_model() {
        let model = Arc::new(RecordingModel::new(1.25));
        let state = state_with(model.clone());

        let mut handles = Vec::new();
        for i in 0..16 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                let form = SampleForm { wind_speed: Some(i.to_string()), ..Default::default() };
                predict(State(state), Form(form)).await.map(|Html(html)| html)
            }));
        }

        for handle in handles {
            let html = handle.await.unwrap().unwrap();
            assert!(html.contains("1.2500"));
        }
        assert_eq!(model.calls(), 16);
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
    }
}
