//! Generations facade against a mock server

use crate::integration::fixtures::{envelope, sample_generation};
use crate::integration::mock_server::MockServerFixture;
use mockito::Matcher;
use primvoices::{ApiResponse, Generation, GenerationCreateParams, PaginationParams, Quality};
use serde_json::json;

fn generation() -> Generation {
    serde_json::from_value(sample_generation()).unwrap()
}

/// Run `create` with params that must fail validation and check nothing was sent.
async fn assert_rejected(params: GenerationCreateParams, expected: &str) {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_unreachable("POST", "/v1/generations").await;

    let err = fixture
        .client
        .generations()
        .create(&params)
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(err.is_validation(), "expected validation error, got {:?}", err);
    assert_eq!(
        serde_json::to_value(err.to_response()).unwrap(),
        json!({"error": expected, "status": 400, "success": false})
    );
}

#[tokio::test]
async fn test_create_rejects_missing_quality() {
    assert_rejected(
        GenerationCreateParams {
            voice_id: "voice123".into(),
            text: Some("Hello".into()),
            ..Default::default()
        },
        "quality is required",
    )
    .await;
}

#[tokio::test]
async fn test_create_rejects_missing_voice_id() {
    assert_rejected(
        GenerationCreateParams {
            text: Some("Hello".into()),
            quality: Some(Quality::High),
            ..Default::default()
        },
        "voiceId is required",
    )
    .await;
}

#[tokio::test]
async fn test_create_rejects_missing_text_for_text_tiers() {
    for quality in [Quality::Low, Quality::Medium, Quality::High] {
        assert_rejected(
            GenerationCreateParams {
                voice_id: "voice123".into(),
                quality: Some(quality),
                ..Default::default()
            },
            &format!("text is required for quality {}", quality),
        )
        .await;
    }
}

#[tokio::test]
async fn test_create_rejects_missing_source_url_for_voice_tier() {
    assert_rejected(
        GenerationCreateParams {
            voice_id: "voice123".into(),
            quality: Some(Quality::Voice),
            ..Default::default()
        },
        "sourceUrl is required for quality voice",
    )
    .await;
}

#[tokio::test]
async fn test_create_voice_conversion_posts_params_verbatim() {
    let mut fixture = MockServerFixture::new().await;
    let mut created = sample_generation();
    created["quality"] = json!("voice");
    created["text"] = json!(null);
    created["sourceUrl"] = json!("https://example.com/source.wav");
    let mock = fixture
        .mock_post(
            "/v1/generations",
            json!({
                "voiceId": "voice123",
                "sourceUrl": "https://example.com/source.wav",
                "quality": "voice"
            }),
            201,
            &json!({"data": created}),
        )
        .await;

    let params = GenerationCreateParams::voice_conversion("voice123", "https://example.com/source.wav");
    let resp = fixture.client.generations().create(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 201);
    assert_eq!(resp.data.quality_tier(), Some(Quality::Voice));
    assert_eq!(resp.data.source_url.as_deref(), Some("https://example.com/source.wav"));
}

#[tokio::test]
async fn test_create_text_generation() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_post(
            "/v1/generations",
            json!({
                "voiceId": "voice123",
                "text": "Test generation",
                "notes": "Test notes",
                "quality": "high"
            }),
            201,
            &json!({"data": sample_generation()}),
        )
        .await;

    let params = GenerationCreateParams::text_to_speech("voice123", Quality::High, "Test generation")
        .with_notes("Test notes");
    let resp = fixture.client.generations().create(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp, ApiResponse::ok(generation(), 201));
}

#[tokio::test]
async fn test_create_returns_generation_still_rendering() {
    let mut fixture = MockServerFixture::new().await;
    let mut pending = sample_generation();
    pending["audioUrl"] = json!(null);
    pending["cost"] = json!(null);
    let mock = fixture
        .mock_post(
            "/v1/generations",
            json!({"voiceId": "voice123", "text": "Test generation", "quality": "high"}),
            201,
            &json!({"data": pending}),
        )
        .await;

    let params = GenerationCreateParams::text_to_speech("voice123", Quality::High, "Test generation");
    let resp = fixture.client.generations().create(&params).await.unwrap();

    mock.assert_async().await;
    assert!(resp.success);
    assert_eq!(resp.status, 201);
    assert_eq!(resp.data.id, "gen123");
    assert_eq!(resp.data.audio_url, None);
    assert!(!resp.data.is_ready());
    assert_eq!(resp.data.cost, 0.0);
}

#[tokio::test]
async fn test_create_surfaces_service_rejection() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            "/v1/generations",
            402,
            &json!({"message": "Insufficient balance"}),
        )
        .await;

    let params = GenerationCreateParams::text_to_speech("voice123", Quality::Low, "Hi");
    let err = fixture.client.generations().create(&params).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), 402);
    assert_eq!(err.message(), "Insufficient balance");
}

#[tokio::test]
async fn test_list_generations() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/v1/generations", 200, &envelope(json!([sample_generation()])))
        .await;

    let resp = fixture.client.generations().list(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp, ApiResponse::ok(vec![generation()], 200));
}

#[tokio::test]
async fn test_list_generations_with_limit_only() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .authed("GET", "/v1/generations")
        .match_query(Matcher::Exact("limit=5".into()))
        .with_status(200)
        .with_body(envelope(json!([])).to_string())
        .create_async()
        .await;

    let params = PaginationParams::new().limit(5);
    fixture.client.generations().list(Some(&params)).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_retrieve_generation() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json("GET", "/v1/generations/gen123", 200, &envelope(sample_generation()))
        .await;

    let resp = fixture.client.generations().retrieve("gen123").await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.data, generation());
    assert_eq!(resp.data.cost, 1.0);
}

#[tokio::test]
async fn test_delete_generation() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .authed("DELETE", "/v1/generations/gen123")
        .with_status(204)
        .create_async()
        .await;

    let resp = fixture.client.generations().delete("gen123").await.unwrap();

    mock.assert_async().await;
    assert!(resp.success);
    assert_eq!(resp.status, 204);
    assert!(resp.data.is_null());
}
