use sportsref_api::{Client, Error};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn roster_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schools/duke/2018.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>roster</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let body = client.roster_page("duke").await.unwrap();
    assert_eq!(body, "<html>roster</html>");
}

#[tokio::test]
async fn schedule_page_hits_schedule_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schools/kansas/2018-schedule.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>schedule</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let body = client.schedule_page("kansas").await.unwrap();
    assert!(body.contains("schedule"));
}

#[tokio::test]
async fn not_found_is_distinguished() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/boxscores/2017-11-10-19-duke.html"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Page Not Found"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let url = client.locator().boxscore_url("duke", "2017-11-10", "19");
    let err = client.fetch_page(&url).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn server_error_is_not_a_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/schools/duke/2018.html"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.roster_page("duke").await.unwrap_err();
    assert!(!err.is_not_found());
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = Client::with_base_url("http://127.0.0.1:9").unwrap();
    let err = client.roster_page("duke").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(!err.is_not_found());
}
