use crate::e2e::helpers;

use helpers::assertions::assert_translated;
use helpers::fakes::FAKE_AUDIO;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_audio_written_by_translate(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/translate", &json!({ "script": "Hello", "languages": ["es"] }))
        .await
        .unwrap();
    let audio_file = assert_translated(&response.json()["results"][0], "es");

    let response = ctx.client.get(&audio_file).await.unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("content-length", &FAKE_AUDIO.len().to_string());
    assert_eq!(response.body_bytes, FAKE_AUDIO);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_fixture_files(ctx: &TestContext) {
    let (file_name, _) = ctx.fixtures.write_audio_file().await.unwrap();

    let response = ctx
        .client
        .get(&format!("/audio/{}", file_name))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, FAKE_AUDIO);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_audio_file(ctx: &TestContext) {
    let response = ctx.client.get("/audio/missing.mp3").await.unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Audio file not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_serve_files_outside_the_store(ctx: &TestContext) {
    // %2F keeps the separator inside the single path segment
    let response = ctx.client.get("/audio/..%2FCargo.toml").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid audio reference");
}
