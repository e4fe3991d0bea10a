use crate::e2e::helpers;

use helpers::assertions::{assert_failed, assert_translated};
use helpers::{TestContext, FAILING_TTS_LANGUAGE};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_isolate_a_failing_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/translate",
            &json!({ "script": "Hello", "languages": ["es", FAILING_TTS_LANGUAGE] }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let results = response.json()["results"]
        .as_array()
        .expect("Missing results array");
    assert_eq!(results.len(), 2);

    let audio_file = assert_translated(&results[0], "es");
    assert_eq!(results[0]["translation"], json!("[es] Hello"));
    assert!(ctx.fixtures.file_exists(&audio_file).await.unwrap());

    assert_failed(&results[1], FAILING_TTS_LANGUAGE, "No voice available");

    assert_eq!(ctx.translator.calls(), 2);
    assert_eq!(ctx.tts.calls(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_request_order_in_results(ctx: &TestContext) {
    let languages = ["it", "es", "pt-BR"];

    let response = ctx
        .client
        .post(
            "/translate",
            &json!({ "script": "See you soon", "languages": languages }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let results = response.json()["results"].as_array().unwrap();
    let returned: Vec<&str> = results
        .iter()
        .map(|r| r["language"].as_str().unwrap())
        .collect();
    assert_eq!(returned, languages);

    let files: Vec<String> = results
        .iter()
        .zip(languages)
        .map(|(result, language)| assert_translated(result, language))
        .collect();
    assert_eq!(
        files.iter().collect::<std::collections::HashSet<_>>().len(),
        3,
        "Every language must get its own file"
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_language_list_without_calling_collaborators(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/translate", &json!({ "script": "Hello", "languages": [] }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Script and languages are required");

    assert_eq!(ctx.translator.calls(), 0);
    assert_eq!(ctx.tts.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_script(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/translate", &json!({ "languages": ["es"] }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Script and languages are required");
    assert_eq!(ctx.translator.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_invalid_language_codes_per_item(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/translate",
            &json!({ "script": "Hello", "languages": ["../etc", "es"] }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let results = response.json()["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["language"], json!("../etc"));
    assert!(results[0].get("error").is_some());
    assert_translated(&results[1], "es");

    // The invalid code never reaches the translator
    assert_eq!(ctx.translator.calls(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_collaborator_timeout_per_item(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/translate",
            &json!({ "script": "Hello", "languages": [helpers::fakes::SLOW_TRANSLATION_LANGUAGE, "es"] }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let results = response.json()["results"].as_array().unwrap();
    assert_failed(
        &results[0],
        helpers::fakes::SLOW_TRANSLATION_LANGUAGE,
        "Translation timed out",
    );
    assert_translated(&results[1], "es");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/translate", "{\"script\": ")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Invalid input");
    assert_eq!(ctx.translator.calls(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_wrongly_typed_fields_with_json_error(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/translate", &json!({ "script": "Hello", "languages": "es" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("languages");
    response.assert_header("content-type", "application/json");
    assert_eq!(ctx.translator.calls(), 0);
}
