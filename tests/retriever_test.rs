//! Retrieval behavior against a mock server: relay fallback order, empty-body
//! handling, exhaustion, and the privileged API branch.

mod common;

use common::create_test_html;
use mockito::Matcher;
use sitesift::retriever::{RelayEndpoint, Retriever};
use sitesift::{ScrapeError, ScraperOptions};

fn relay_to(server: &mockito::ServerGuard, name: &str, path: &str) -> RelayEndpoint {
    RelayEndpoint::new(name, format!("{}{path}", server.url()), false)
}

#[tokio::test]
async fn first_successful_relay_wins() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html("Relay", "<p>hello</p>");

    let bad = server
        .mock("GET", "/bad")
        .with_status(503)
        .create_async()
        .await;
    let good = server
        .mock("GET", "/good")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(&html)
        .create_async()
        .await;
    let unreached = server
        .mock("GET", "/unreached")
        .with_status(200)
        .with_body("later candidate")
        .expect(0)
        .create_async()
        .await;

    let retriever = Retriever::new().with_relays(vec![
        relay_to(&server, "bad", "/bad"),
        relay_to(&server, "good", "/good"),
        relay_to(&server, "unreached", "/unreached"),
    ]);

    let body = retriever
        .retrieve("https://target.example/", &ScraperOptions::default(), None)
        .await
        .expect("second relay succeeds");
    assert_eq!(body, html);

    bad.assert_async().await;
    good.assert_async().await;
    unreached.assert_async().await;
}

#[tokio::test]
async fn empty_body_counts_as_candidate_failure() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/empty")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;
    server
        .mock("GET", "/good")
        .with_status(200)
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let retriever = Retriever::new().with_relays(vec![
        relay_to(&server, "empty", "/empty"),
        relay_to(&server, "good", "/good"),
    ]);

    let body = retriever
        .retrieve("https://target.example/", &ScraperOptions::default(), None)
        .await
        .expect("non-empty relay wins");
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn exhausted_relays_report_last_failure() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/a")
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/b")
        .with_status(404)
        .create_async()
        .await;

    let retriever = Retriever::new().with_relays(vec![
        relay_to(&server, "a", "/a"),
        relay_to(&server, "b", "/b"),
    ]);

    let err = retriever
        .retrieve("https://target.example/", &ScraperOptions::default(), None)
        .await
        .expect_err("every candidate fails");

    match err {
        ScrapeError::Network(message) => {
            assert!(message.contains("404"), "last observed failure kept: {message}");
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_branch_sends_expected_parameters() {
    let mut server = mockito::Server::new_async().await;
    let html = create_test_html("API", "<p>rendered</p>");

    let api = server
        .mock("GET", "/v1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "secret".into()),
            Matcher::UrlEncoded("url".into(), "https://target.example/".into()),
            Matcher::UrlEncoded("js_render".into(), "true".into()),
            Matcher::UrlEncoded("premium_proxy".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(&html)
        .create_async()
        .await;

    let retriever = Retriever::new().with_api_base(format!("{}/v1", server.url()));
    let body = retriever
        .retrieve(
            "https://target.example/",
            &ScraperOptions::default(),
            Some("secret"),
        )
        .await
        .expect("API call succeeds");
    assert_eq!(body, html);
    api.assert_async().await;
}

#[tokio::test]
async fn api_failure_is_terminal_without_relay_fallback() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/v1")
        .match_query(Matcher::Any)
        .with_status(403)
        .create_async()
        .await;
    let relay = server
        .mock("GET", "/good")
        .with_status(200)
        .with_body("would succeed")
        .expect(0)
        .create_async()
        .await;

    let retriever = Retriever::new()
        .with_api_base(format!("{}/v1", server.url()))
        .with_relays(vec![relay_to(&server, "good", "/good")]);

    let err = retriever
        .retrieve(
            "https://target.example/",
            &ScraperOptions::default(),
            Some("secret"),
        )
        .await
        .expect_err("API failure must not fall back to relays");

    assert!(matches!(err, ScrapeError::Network(_)));
    assert!(err.to_string().contains("403"));
    relay.assert_async().await;
}
