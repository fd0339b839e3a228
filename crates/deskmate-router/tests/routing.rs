// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end routing scenarios with the gateway disabled (template path)
//! and enabled (wiremock-backed gateway path).

use deskmate_config::model::GrokConfig;
use deskmate_core::{ConversationTurn, Intent, Language, UserContext};
use deskmate_grok::GrokGateway;
use deskmate_intent::IntentClassifier;
use deskmate_lang::{LanguageDetector, Localizer};
use deskmate_router::{QueryRouter, ResponseVia};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn offline_router() -> QueryRouter {
    let gateway = GrokGateway::from_config(&GrokConfig::default()).expect("no key, no failure");
    QueryRouter::new(
        LanguageDetector::new(),
        Localizer::new(),
        IntentClassifier::new(),
        gateway,
    )
}

fn test_user() -> UserContext {
    UserContext::new("Ana", "EMP-1001", "ana@example.com")
}

#[tokio::test]
async fn spanish_password_query_gets_spanish_template() {
    let router = offline_router();
    let response = router
        .route("hola, necesito ayuda con mi contraseña", &test_user(), &[])
        .await;

    assert_eq!(response.language, Language::Es);
    assert_eq!(response.via, ResponseVia::Template(Intent::PasswordReset));
    assert!(response.text.contains("Ana"));
    for step in 1..=6 {
        assert!(
            response.text.contains(&format!("Paso {step}")),
            "missing Paso {step}"
        );
    }
}

#[tokio::test]
async fn english_printer_query_gets_printer_template() {
    let router = offline_router();
    let response = router
        .route("my printer won't print", &test_user(), &[])
        .await;

    assert_eq!(response.language, Language::En);
    assert_eq!(response.via, ResponseVia::Template(Intent::Printer));
    for step in 1..=7 {
        assert!(
            response.text.contains(&format!("Step {step}")),
            "missing Step {step}"
        );
    }
}

#[tokio::test]
async fn unmatched_query_gets_clarification() {
    let router = offline_router();
    let response = router
        .route("the flux capacitor is broken", &test_user(), &[])
        .await;

    assert_eq!(response.via, ResponseVia::Clarification);
    // Four guiding questions.
    assert_eq!(response.text.matches('?').count(), 4);
}

#[tokio::test]
async fn password_beats_vpn_in_priority() {
    let router = offline_router();
    let response = router
        .route("vpn password not working", &test_user(), &[])
        .await;
    assert_eq!(response.via, ResponseVia::Template(Intent::PasswordReset));
}

#[tokio::test]
async fn arabic_fallback_is_wrapped_rtl() {
    let router = offline_router();
    let response = router
        .route("مرحبا، كلمة المرور لا تعمل", &test_user(), &[])
        .await;
    assert_eq!(response.language, Language::Ar);
    assert!(response.text.starts_with("<div dir=\"rtl\""));
}

#[tokio::test]
async fn welcome_reflects_gateway_availability() {
    let router = offline_router();
    assert!(!router.ai_available());
    let welcome = router.welcome(&test_user(), Language::En);
    assert!(welcome.starts_with("Hello Ana!"));
    assert!(welcome.contains("basic mode"));
}

#[tokio::test]
async fn gateway_success_bypasses_templates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Have you tried turning it off and on again?"}}]
        })))
        .mount(&server)
        .await;

    let config = GrokConfig {
        api_key: Some("xai-test-key".to_string()),
        api_url: server.uri(),
        ..GrokConfig::default()
    };
    let router = QueryRouter::new(
        LanguageDetector::new(),
        Localizer::new(),
        IntentClassifier::new(),
        GrokGateway::from_config(&config).expect("gateway builds"),
    );

    let history = vec![ConversationTurn::user("earlier message", Language::En)];
    let response = router
        .route("my printer won't print", &test_user(), &history)
        .await;

    assert_eq!(response.via, ResponseVia::Gateway);
    assert_eq!(response.text, "Have you tried turning it off and on again?");
}

#[tokio::test]
async fn gateway_failure_degrades_to_template_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let config = GrokConfig {
        api_key: Some("xai-test-key".to_string()),
        api_url: server.uri(),
        ..GrokConfig::default()
    };
    let router = QueryRouter::new(
        LanguageDetector::new(),
        Localizer::new(),
        IntentClassifier::new(),
        GrokGateway::from_config(&config).expect("gateway builds"),
    );

    // "locked" triggers the password pool without tripping the Italian
    // language indicator that the word "password" carries.
    let response = router
        .route("I am locked out of my account", &test_user(), &[])
        .await;
    assert_eq!(response.via, ResponseVia::Template(Intent::PasswordReset));
    assert!(response.text.contains("Step 1"));
}
