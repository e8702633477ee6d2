//! End-to-end triage through the public API with the built-in dataset

use samadhan::ai::{clean_response, StreamDecoder};
use samadhan::analysis::KnowledgeScorer;
use samadhan::config::{OpenRouterConfig, WatsonxConfig};
use samadhan::models::AnalysisSource;
use samadhan::{
    BuiltinKnowledge, Category, Complaint, KnowledgeProvider, Priority, Sentiment, TriageConfig,
    TriageService,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn offline() -> TriageService {
    samadhan::init_tracing();
    TriageService::from_config(&TriageConfig::default(), None)
}

fn openrouter_at(server: &MockServer) -> OpenRouterConfig {
    let mut config = OpenRouterConfig::new("or-key");
    config.base_url = server.uri();
    config.timeout = Duration::from_secs(5);
    config
}

fn watsonx_at(server: &MockServer) -> WatsonxConfig {
    let mut config = WatsonxConfig::new("wx-key");
    config.iam_url = format!("{}/identity/token", server.uri());
    config.streaming_url = Some(format!("{}/ml/v1/text/chat_stream", server.uri()));
    config.auth_timeout = Duration::from_secs(5);
    config.stream_timeout = Duration::from_secs(5);
    config
}

#[tokio::test]
async fn urgent_water_complaint_offline() {
    let service = offline();
    let outcome = service
        .handle(&Complaint::new("No water supply for 3 days, very urgent"))
        .await;

    let analysis = &outcome.analysis;
    assert_eq!(analysis.category, Category::Utilities);
    assert_eq!(analysis.department, "Water Supply");
    assert_eq!(analysis.priority, Priority::Critical);
    assert_eq!(analysis.sentiment, Sentiment::Neutral);
    assert_eq!(analysis.source, AnalysisSource::RuleBased);
    assert_eq!(analysis.timeline, "24-48 hours");
    assert!((0.0..=1.0).contains(&analysis.confidence));

    let kb = BuiltinKnowledge::new();
    let expected = &kb.response_templates()[&Category::Utilities][&Priority::Critical][0];
    assert_eq!(&outcome.reply, expected);
}

#[tokio::test]
async fn grateful_complaint_is_positive() {
    let outcome = offline()
        .handle(&Complaint::new("Thank you, excellent service"))
        .await;
    assert_eq!(outcome.analysis.sentiment, Sentiment::Positive);
    assert_eq!(outcome.analysis.department, "General Services");
    assert_eq!(outcome.analysis.timeline, "3-5 days");
}

#[test]
fn scorer_is_deterministic() {
    let scorer = KnowledgeScorer::new(Arc::new(BuiltinKnowledge::new()));
    let texts = [
        "Huge pothole on the main road near the school",
        "Hospital has no doctor and no medicine, I am furious",
        "Minor suggestion about the traffic signal timing",
        "",
    ];
    for text in texts {
        let first = scorer.classify(text);
        let second = scorer.classify(text);
        assert_eq!(first, second, "differs for {text:?}");
    }
}

#[tokio::test]
async fn failing_classifier_falls_back_to_rules() {
    let server = MockServer::start().await;
    // One classification attempt and one chat reply attempt, no retries
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(2)
        .mount(&server)
        .await;

    let config = TriageConfig {
        openrouter: Some(openrouter_at(&server)),
        ..TriageConfig::default()
    };
    let service = TriageService::from_config(&config, None);

    let outcome = service
        .handle(&Complaint::new("Streetlight broken, road is dark"))
        .await;
    assert_eq!(outcome.analysis.source, AnalysisSource::RuleBased);
    assert_eq!(outcome.analysis.category, Category::Infrastructure);
    assert!(!outcome.reply.is_empty());
}

#[tokio::test]
async fn remote_classification_is_enriched() {
    let server = MockServer::start().await;
    let classification = r#"{"category":"Healthcare","priority":"critical","department":"Healthcare","sentiment":"negative","confidence":0.95,"district":"Kanpur"}"#;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": classification } }]
        })))
        .mount(&server)
        .await;

    let config = TriageConfig {
        openrouter: Some(openrouter_at(&server)),
        ..TriageConfig::default()
    };
    let service = TriageService::from_config(&config, None);
    let analysis = service
        .analyze(&Complaint::new("Ambulance did not come"))
        .await;

    assert_eq!(analysis.source, AnalysisSource::Remote);
    assert_eq!(analysis.category, Category::Healthcare);
    assert_eq!(analysis.priority, Priority::Critical);
    assert_eq!(analysis.district.as_deref(), Some("Kanpur"));
    assert_eq!(
        analysis.timeline,
        analysis.department_info.response_time
    );
}

#[tokio::test]
async fn generator_falls_back_to_template_when_providers_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ml/v1/text/chat_stream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = TriageConfig {
        watsonx: Some(watsonx_at(&server)),
        openrouter: Some(openrouter_at(&server)),
        ..TriageConfig::default()
    };
    let service = TriageService::from_config(&config, None);

    let reply = service
        .generator()
        .generate(&Complaint::new("Exam paper leaked"), Category::Education, Priority::High)
        .await;

    let kb = BuiltinKnowledge::new();
    assert_eq!(
        reply,
        kb.response_templates()[&Category::Education][&Priority::High][0]
    );
}

#[tokio::test]
async fn concurrent_complaints_share_one_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/identity/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access_token": "tok", "expires_in": 3600 }))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ml/v1/text/chat_stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "data: {\"choices\":[{\"delta\":{\"content\":\"We have \"}}]}\n\n\
             data: {\"choices\":[{\"delta\":{\"content\":\"**registered** your complaint.\"}}]}\n\n\
             data: [DONE]\n\n",
            "text/event-stream",
        ))
        .expect(6)
        .mount(&server)
        .await;

    let config = TriageConfig {
        watsonx: Some(watsonx_at(&server)),
        ..TriageConfig::default()
    };
    let service = Arc::new(TriageService::from_config(&config, None));

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .handle(&Complaint::new(format!("Garbage not collected, street {i}")))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.unwrap();
        assert_eq!(outcome.reply, "We have registered your complaint.");
        assert_eq!(outcome.analysis.category, Category::Environment);
    }
}

#[test]
fn split_event_reassembles() {
    let mut decoder = StreamDecoder::new();
    decoder.push(b"data: {\"choices\":[{\"delta\":{\"content\":\"Hel");
    decoder.push(b"lo\"}}]}\n\n");
    assert_eq!(decoder.finish().unwrap(), "Hello");
}

#[test]
fn cleaner_is_idempotent_on_provider_text() {
    let raw = "### Response\n**Dear Citizen**,\n\nPlease call `1076`. [Portal](https://jansunwai.up.nic.in)\n\n\n```json\n{}\n```";
    let once = clean_response(raw);
    assert_eq!(once, "Response Dear Citizen, Please call 1076. Portal");
    assert_eq!(clean_response(&once), once);
}
