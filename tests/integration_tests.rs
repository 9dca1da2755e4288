//! Integration tests for vlcrc against a mock VLC HTTP interface.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vlcrc::client::Client;
use vlcrc::config::Config;
use vlcrc::error::Error;
use vlcrc::protocol::{Params, Resource, Response, SortMode, SortOrder};

/// Basic auth header for an empty username and the password `secret`,
/// as VLC expects it.
const AUTH_HEADER: &str = "Basic OnNlY3JldA==";

/// Create a client pointed at the mock server.
fn client_for(server: &MockServer) -> Client {
    let address = server.address();
    let config = Config::with_endpoint(address.ip().to_string(), address.port(), "secret");
    Client::new(&config).unwrap()
}

#[tokio::test]
async fn dispatch_sends_resource_path_query_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(query_param("command", "pl_stop"))
        .and(header("authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "state": "stopped" })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).stop().await.unwrap();
    assert_eq!(response.as_json().unwrap()["state"], "stopped");
}

#[tokio::test]
async fn json_body_is_delivered_parsed() {
    let server = MockServer::start().await;

    let playlist = json!({
        "ro": "ro",
        "type": "node",
        "name": "Playlist",
        "children": [{ "id": "1", "name": "song.mp3", "duration": 185 }]
    });
    Mock::given(method("GET"))
        .and(path("/requests/playlist.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(playlist.clone()))
        .mount(&server)
        .await;

    let response = client_for(&server).playlist().await.unwrap();
    assert_eq!(response, Response::Json(playlist));
}

#[tokio::test]
async fn non_json_body_degrades_to_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let response = client_for(&server).status().await.unwrap();
    assert_eq!(response.as_text(), Some("<html>not json</html>"));
    assert!(response.as_json().is_none());
}

#[tokio::test]
async fn redirect_and_error_codes_fail_with_the_code() {
    for code in [300u16, 404, 500] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let err = client_for(&server).status().await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedStatus(_)), "code {code}");
        assert!(err.to_string().contains(&code.to_string()), "code {code}");
    }
}

#[tokio::test]
async fn enqueue_produces_in_enqueue_with_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(query_param("command", "in_enqueue"))
        .and(query_param("input", "/media/song.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).enqueue("/media/song.mp3").await.unwrap();
}

#[tokio::test]
async fn go_to_produces_pl_play_with_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(query_param("command", "pl_play"))
        .and(query_param("input", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).go_to(5).await.unwrap();
}

#[tokio::test]
async fn playlist_play_includes_id_only_when_given() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(query_param("command", "pl_play"))
        .and(query_param("id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .named("pl_play with id")
        .mount(&server)
        .await;

    client.playlist_play(Some(7)).await.unwrap();

    // Without an id the parameter must be absent entirely.
    server.reset().await;
    Mock::given(method("GET"))
        .and(query_param("command", "pl_play"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.playlist_play(None).await.unwrap();
    assert!(response.as_json().is_some());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("command=pl_play"));
}

#[tokio::test]
async fn pause_states_map_to_three_commands() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    for command in ["pl_pause", "pl_forceresume", "pl_forcepause"] {
        Mock::given(method("GET"))
            .and(query_param("command", command))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .named(command)
            .mount(&server)
            .await;
    }

    client.pause(None).await.unwrap();
    client.pause(Some(true)).await.unwrap();
    client.pause(Some(false)).await.unwrap();
}

#[tokio::test]
async fn sort_sends_order_as_id_and_mode_as_val() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("command", "pl_sort"))
        .and(query_param("id", "1"))
        .and(query_param("val", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .sort(SortMode::Name, SortOrder::Reverse)
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_sort_arguments_dispatch_nothing() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.sort_by("bogus-mode", "forward").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = client.sort_by("name", "backward").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn aspect_ratio_forms_normalize_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("command", "aspectratio"))
        .and(query_param("val", "16:9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.aspect_ratio((16, 9)).await.unwrap();
    client.aspect_ratio([16, 9]).await.unwrap();
    client
        .aspect_ratio("16:9".parse::<vlcrc::protocol::AspectRatio>().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn volume_and_seek_pass_values_through() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("GET"))
        .and(query_param("command", "volume"))
        .and(query_param("val", "+10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .named("relative volume")
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("command", "seek"))
        .and(query_param("val", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .named("absolute seek")
        .mount(&server)
        .await;

    client.volume("+10").await.unwrap();
    client.seek(42i64).await.unwrap();
}

#[tokio::test]
async fn browse_queries_the_browse_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/browse.json"))
        .and(query_param("uri", "file:///media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "element": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).browse("file:///media").await.unwrap();
}

#[tokio::test]
async fn generic_request_reaches_unwrapped_commands() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/requests/status.json"))
        .and(query_param("command", "key"))
        .and(query_param("val", "nav-up"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .request(
            Resource::Status,
            Params::command("key").with("val", "nav-up"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn art_streams_bytes_from_the_root() {
    let server = MockServer::start().await;
    let image = b"\x89PNG\r\n\x1a\nfake image bytes".to_vec();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("authorization", AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(image.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).art().await.unwrap();
    let bytes = response.bytes().await.unwrap();
    assert_eq!(bytes.as_ref(), image.as_slice());
}

#[tokio::test]
async fn art_does_not_validate_the_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_bytes(b"not art".to_vec()))
        .mount(&server)
        .await;

    let response = client_for(&server).art().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"not art");
}
