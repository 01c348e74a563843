use landmark_guide::config::{Config, KnowledgeConfig, ModelConfig};
use landmark_guide::generator::agents::ItineraryStyle;
use landmark_guide::generator::context::GeneratorContext;
use landmark_guide::generator::orchestrator::Orchestrator;
use landmark_guide::generator::workflow::{Request, launch};
use mockito::{Matcher, Mock, Server, ServerGuard};

const GEMINI_PATH: &str = "/v1/models/gemini-1.5-flash:generateContent";
const PNG_URI: &str = "data:image/png;base64,aGVsbG8=";

/// 指向两个本地桩服务的配置
fn test_config(gemini: &ServerGuard, wikipedia: &ServerGuard) -> Config {
    Config {
        model: ModelConfig {
            api_key: "test-key".to_string(),
            api_base_url: gemini.url(),
            ..ModelConfig::default()
        },
        knowledge: KnowledgeConfig {
            api_base_url: wikipedia.url(),
            ..KnowledgeConfig::default()
        },
        ..Config::default()
    }
}

fn candidate(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
    .to_string()
}

async fn gemini_mock(server: &mut ServerGuard, body_pattern: &str, reply: &str) -> Mock {
    server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Regex(body_pattern.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate(reply))
        .create_async()
        .await
}

#[tokio::test]
async fn test_image_to_composed_answer() {
    let mut gemini = Server::new_async().await;
    let mut wikipedia = Server::new_async().await;

    let vision = gemini_mock(
        &mut gemini,
        "inline_data",
        "This is the Eiffel Tower in Paris, France.",
    )
    .await;
    let refine = gemini_mock(
        &mut gemini,
        "Rewrite the following information about",
        "## Eiffel Tower\n\nA wrought-iron lattice tower.",
    )
    .await;
    let advise = gemini_mock(&mut gemini, "You are a travel expert", "- Book tickets online").await;
    let summary = wikipedia
        .mock("GET", "/page/summary/Eiffel%20Tower")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"title": "Eiffel Tower", "extract": "The Eiffel Tower is a wrought-iron lattice tower."}"#)
        .create_async()
        .await;

    let config = test_config(&gemini, &wikipedia);
    let answer = launch(&config, Request::Image(PNG_URI.to_string()))
        .await
        .unwrap();

    assert_eq!(
        answer,
        "## Eiffel Tower\n\nA wrought-iron lattice tower.\n\n##🔹 **Travel Recommendations:**\n- Book tickets online"
    );
    vision.assert_async().await;
    refine.assert_async().await;
    advise.assert_async().await;
    summary.assert_async().await;
}

#[tokio::test]
async fn test_knowledge_continues_when_wikipedia_fails() {
    let mut gemini = Server::new_async().await;
    let mut wikipedia = Server::new_async().await;

    let refine = gemini_mock(
        &mut gemini,
        "Error retrieving Wikipedia information",
        "Nothing known.",
    )
    .await;
    let advise = gemini_mock(&mut gemini, "You are a travel expert", "- Bring a map").await;
    let _summary = wikipedia
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let orchestrator =
        Orchestrator::new(GeneratorContext::new(test_config(&gemini, &wikipedia)).unwrap());
    let answer = orchestrator.fetch_knowledge("Atlantis").await;

    assert!(answer.starts_with("Nothing known."));
    assert!(answer.contains("Travel Recommendations:"));
    refine.assert_async().await;
    advise.assert_async().await;
}

#[tokio::test]
async fn test_missing_extract_uses_placeholder() {
    let mut gemini = Server::new_async().await;
    let mut wikipedia = Server::new_async().await;

    let refine = gemini_mock(
        &mut gemini,
        "Wikipedia has no details on this topic",
        "Placeholder refined.",
    )
    .await;
    let _advise = gemini_mock(&mut gemini, "You are a travel expert", "- Tips").await;
    let _summary = wikipedia
        .mock("GET", "/page/summary/Big%20Ben")
        .with_status(200)
        .with_body(r#"{"title": "Big Ben"}"#)
        .create_async()
        .await;

    let orchestrator =
        Orchestrator::new(GeneratorContext::new(test_config(&gemini, &wikipedia)).unwrap());
    let answer = orchestrator.fetch_knowledge("Big Ben").await;

    assert!(answer.starts_with("Placeholder refined."));
    refine.assert_async().await;
}

#[tokio::test]
async fn test_invalid_image_makes_no_requests() {
    let mut gemini = Server::new_async().await;
    let mut wikipedia = Server::new_async().await;

    let model = gemini
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let summary = wikipedia
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = test_config(&gemini, &wikipedia);
    let answer = launch(&config, Request::Image("image/png;base64,aGVsbG8=".to_string()))
        .await
        .unwrap();

    assert_eq!(answer, "Invalid image format. Please upload a valid image.");
    model.assert_async().await;
    summary.assert_async().await;
}

#[tokio::test]
async fn test_text_query_reports_upstream_error() {
    let mut gemini = Server::new_async().await;
    let wikipedia = Server::new_async().await;

    let _model = gemini
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
        .create_async()
        .await;

    let config = test_config(&gemini, &wikipedia);
    let answer = launch(&config, Request::Text("Hello".to_string()))
        .await
        .unwrap();

    assert_eq!(answer, "Error: API key not valid");
}

#[tokio::test]
async fn test_itinerary_success() {
    let mut gemini = Server::new_async().await;
    let wikipedia = Server::new_async().await;

    let itinerary_text = "Day 1: Louvre\n<br><br>\nDay 2: Montmartre\n<br><br>\nDay 3: Versailles";
    let mock = gemini_mock(
        &mut gemini,
        "Create a detailed 3-day travel itinerary for Paris",
        itinerary_text,
    )
    .await;

    let config = test_config(&gemini, &wikipedia);
    let answer = launch(
        &config,
        Request::Itinerary {
            destination: "Paris".to_string(),
            days: 3,
            style: ItineraryStyle::HtmlTagged,
        },
    )
    .await
    .unwrap();

    assert_eq!(answer, itinerary_text);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_itinerary_failure_is_an_error() {
    let mut gemini = Server::new_async().await;
    let wikipedia = Server::new_async().await;

    let _model = gemini
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let orchestrator =
        Orchestrator::new(GeneratorContext::new(test_config(&gemini, &wikipedia)).unwrap());
    let err = orchestrator.generate_itinerary("Paris", 3).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to generate holiday plan. Please try again."
    );
}
