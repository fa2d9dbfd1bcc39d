//! Provider adapter tests against local mock HTTP servers.

use std::sync::Arc;
use std::time::{Duration, Instant};
use mockito::{Matcher, Server};
use serde_json::json;
use text_translator_core::translator::{
    HuggingFaceTranslator, LibreTranslateTranslator, MyMemoryTranslator,
};
use text_translator_core::{Cascade, Error, TranslationRequest, Translator};

const TIMEOUT: Duration = Duration::from_secs(5);

fn hello() -> TranslationRequest {
    TranslationRequest::new("Hello", "en", "fr")
}

fn huggingface(server: &Server) -> HuggingFaceTranslator {
    HuggingFaceTranslator::new(
        server.url(),
        Some("hf_test".to_string()),
        "facebook/m2m100_418M".to_string(),
        TIMEOUT,
    )
    .unwrap()
}

fn libre(server: &Server, path: &str) -> LibreTranslateTranslator {
    LibreTranslateTranslator::new(format!("{}{path}", server.url()), None, TIMEOUT).unwrap()
}

fn mymemory(server: &Server, chunk_size: usize) -> MyMemoryTranslator {
    MyMemoryTranslator::new(server.url(), None, chunk_size, TIMEOUT).unwrap()
}

// =============================================================================
// Hugging Face
// =============================================================================

#[tokio::test]
async fn test_huggingface_sends_credential_and_languages() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .match_header("authorization", "Bearer hf_test")
        .match_body(Matcher::Json(json!({
            "inputs": "Hello",
            "parameters": {"src_lang": "en", "tgt_lang": "fr"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"translation_text": "Bonjour"}]).to_string())
        .create_async()
        .await;

    let result = huggingface(&server).translate(&hello()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.text, "Bonjour");
    assert_eq!(result.provider, "huggingface facebook/m2m100_418M");
}

#[tokio::test]
async fn test_huggingface_generated_text_object() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .with_status(200)
        .with_body(json!({"generated_text": "Bonjour"}).to_string())
        .create_async()
        .await;

    let result = huggingface(&server).translate(&hello()).await.unwrap();
    assert_eq!(result.text, "Bonjour");
}

#[tokio::test]
async fn test_huggingface_missing_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .with_status(200)
        .with_body(json!({"estimated_time": 20.0}).to_string())
        .create_async()
        .await;

    let err = huggingface(&server).translate(&hello()).await.unwrap_err();
    assert!(matches!(err, Error::ProviderEmptyResult { .. }));
    assert!(err.to_string().contains("no translation field in response"));
}

#[tokio::test]
async fn test_huggingface_error_status_is_attempted_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .with_status(503)
        .with_body("Model is loading")
        .expect(1)
        .create_async()
        .await;

    let err = huggingface(&server).translate(&hello()).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::ProviderRejected { .. }));
    let message = err.to_string();
    assert!(message.contains("503"), "{message}");
    assert!(message.contains("Model is loading"), "{message}");
}

// =============================================================================
// LibreTranslate
// =============================================================================

#[tokio::test]
async fn test_libre_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/translate")
        .match_body(Matcher::Json(json!({
            "q": "Hello",
            "source": "auto",
            "target": "fr",
            "format": "text"
        })))
        .with_status(200)
        .with_body(json!({"translatedText": "Bonjour"}).to_string())
        .create_async()
        .await;

    let translator = libre(&server, "/translate");
    let request = TranslationRequest::new("Hello", "auto", "fr");
    assert_eq!(translator.skip_reason(&request), None);

    let result = translator.translate(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.text, "Bonjour");
    assert!(!result.is_partial());
}

#[tokio::test]
async fn test_libre_failure_reasons_are_distinct() {
    let mut server = Server::new_async().await;
    let _status = server
        .mock("POST", "/status")
        .with_status(429)
        .with_body("Too many requests")
        .create_async()
        .await;
    let _html = server
        .mock("POST", "/html")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;
    let _empty = server
        .mock("POST", "/empty")
        .with_status(200)
        .with_body(json!({"error": "nope"}).to_string())
        .create_async()
        .await;

    let status = libre(&server, "/status").translate(&hello()).await.unwrap_err();
    let html = libre(&server, "/html").translate(&hello()).await.unwrap_err();
    let empty = libre(&server, "/empty").translate(&hello()).await.unwrap_err();

    assert!(
        status
            .to_string()
            .ends_with("/status: HTTP 429 Too Many Requests: Too many requests")
    );
    assert!(html.to_string().ends_with("/html: invalid JSON body"));
    assert!(empty.to_string().ends_with("/empty: no translatedText in response"));
    assert!(matches!(empty, Error::ProviderEmptyResult { .. }));
}

#[tokio::test]
async fn test_libre_unreachable() {
    // Nothing listens on port 9 (discard) in the test environment
    let translator =
        LibreTranslateTranslator::new("http://127.0.0.1:9/translate".to_string(), None, TIMEOUT)
            .unwrap();
    let err = translator.translate(&hello()).await.unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable { .. }));
    assert!(err.to_string().starts_with("http://127.0.0.1:9/translate: unreachable"));
}

// =============================================================================
// MyMemory
// =============================================================================

#[tokio::test]
async fn test_mymemory_uses_locale_codes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/get")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Hello".into()),
            Matcher::UrlEncoded("langpair".into(), "en-GB|fr-FR".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"responseData": {"translatedText": "Bonjour"}, "responseStatus": 200})
                .to_string(),
        )
        .create_async()
        .await;

    let result = mymemory(&server, 450).translate(&hello()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.text, "Bonjour");
    assert_eq!(result.provider, "mymemory");
}

#[tokio::test]
async fn test_mymemory_joins_chunks_and_drops_empty_ones() {
    let mut server = Server::new_async().await;
    let _one = server
        .mock("GET", "/get")
        .match_query(Matcher::UrlEncoded("q".into(), "one".into()))
        .with_body(
            json!({"responseData": {"translatedText": "un"}, "responseStatus": 200}).to_string(),
        )
        .create_async()
        .await;
    let _two = server
        .mock("GET", "/get")
        .match_query(Matcher::UrlEncoded("q".into(), "two".into()))
        .with_body(
            json!({"responseData": {"translatedText": ""}, "responseStatus": 200, "matches": []})
                .to_string(),
        )
        .create_async()
        .await;
    let _three = server
        .mock("GET", "/get")
        .match_query(Matcher::UrlEncoded("q".into(), "three".into()))
        .with_body(
            json!({"responseData": {"translatedText": "trois"}, "responseStatus": 200})
                .to_string(),
        )
        .create_async()
        .await;

    // chunk size 3 puts every word in its own chunk
    let request = TranslationRequest::new("one two three", "en", "fr");
    let result = mymemory(&server, 3).translate(&request).await.unwrap();

    assert_eq!(result.text, "un trois");
    assert!(result.is_partial());
    assert_eq!(result.notes.len(), 1);
    assert!(result.notes[0].starts_with("chunk 2/3 dropped"), "{:?}", result.notes);
}

#[tokio::test]
async fn test_mymemory_fails_only_when_every_chunk_fails() {
    let mut server = Server::new_async().await;
    let _quota = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_body(
            json!({
                "responseData": {"translatedText": "QUOTA EXCEEDED"},
                "responseStatus": "429",
                "responseDetails": "daily limit reached"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = TranslationRequest::new("one two", "en", "fr");
    let err = mymemory(&server, 3).translate(&request).await.unwrap_err();

    assert!(matches!(err, Error::ProviderEmptyResult { .. }));
    let message = err.to_string();
    assert!(message.starts_with("mymemory: every chunk failed"), "{message}");
    assert!(message.contains("daily limit reached"), "{message}");
}

#[tokio::test]
async fn test_mymemory_stops_at_first_unreachable_chunk() {
    // Accepts connections into the backlog but never answers
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let translator = MyMemoryTranslator::new(base, None, 3, Duration::from_secs(1)).unwrap();

    let request = TranslationRequest::new("one two three four five", "en", "fr");
    let started = Instant::now();
    let err = translator.translate(&request).await.unwrap_err();

    assert!(matches!(err, Error::ProviderUnavailable { .. }), "{err:?}");
    assert!(err.to_string().starts_with("mymemory: unreachable"), "{err}");
    assert!(
        started.elapsed() < Duration::from_secs(3),
        "took {:?} for five chunks",
        started.elapsed()
    );
    drop(listener);
}

#[tokio::test]
async fn test_mymemory_unreachable_is_not_a_partial_result() {
    let translator =
        MyMemoryTranslator::new("http://127.0.0.1:9".to_string(), None, 3, TIMEOUT).unwrap();

    let err = translator
        .translate(&TranslationRequest::new("one two three", "en", "fr"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ProviderUnavailable { .. }));
}

#[tokio::test]
async fn test_mymemory_skipped_for_auto_and_unmapped_languages() {
    let server = Server::new_async().await;
    let translator = mymemory(&server, 450);

    assert!(translator.skip_reason(&TranslationRequest::new("Hi", "auto", "fr")).is_some());
    assert!(translator.skip_reason(&TranslationRequest::new("Hi", "en", "la")).is_some());
    assert!(translator.skip_reason(&hello()).is_none());
}

// =============================================================================
// Full cascade over HTTP
// =============================================================================

#[tokio::test]
async fn test_cascade_falls_through_to_mymemory() {
    let mut server = Server::new_async().await;
    let _hf = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    let _libre = server
        .mock("POST", "/translate")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;
    let _mm = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .with_body(
            json!({"responseData": {"translatedText": "Bonjour"}, "responseStatus": 200})
                .to_string(),
        )
        .create_async()
        .await;

    let cascade = Cascade::new(vec![
        Arc::new(huggingface(&server)) as Arc<dyn Translator>,
        Arc::new(libre(&server, "/translate")),
        Arc::new(mymemory(&server, 450)),
    ]);

    let result = cascade.translate(&hello()).await.unwrap();
    assert_eq!(result.text, "Bonjour");
    assert_eq!(result.provider, "mymemory");
}

#[tokio::test]
async fn test_cascade_with_auto_source_reports_only_attempted() {
    let mut server = Server::new_async().await;
    let hf = server
        .mock("POST", "/models/facebook/m2m100_418M")
        .expect(0)
        .create_async()
        .await;
    let mm = server
        .mock("GET", "/get")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let _libre = server
        .mock("POST", "/translate")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let cascade = Cascade::new(vec![
        Arc::new(huggingface(&server)) as Arc<dyn Translator>,
        Arc::new(libre(&server, "/translate")),
        Arc::new(mymemory(&server, 450)),
    ]);

    let err = cascade
        .translate(&TranslationRequest::new("Hello", "auto", "fr"))
        .await
        .unwrap_err();

    hf.assert_async().await;
    mm.assert_async().await;
    match err {
        Error::CascadeExhausted { failures } => {
            assert_eq!(failures.len(), 1);
            assert!(failures[0].contains("HTTP 502"));
        }
        other => panic!("expected CascadeExhausted, got {other:?}"),
    }
}
