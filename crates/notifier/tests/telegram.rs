use homework_notifier::{Notifier, TelegramNotifier};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn notifier_for(server: &MockServer) -> TelegramNotifier {
    TelegramNotifier::new(reqwest::Client::new(), server.uri(), "123:abc", "4242")
}

#[tokio::test]
async fn sends_chat_id_and_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(serde_json::json!({
            "chat_id": "4242",
            "text": "Изменился статус проверки работы \"hw1\"."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": {"message_id": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    notifier_for(&server)
        .send_text("Изменился статус проверки работы \"hw1\".")
        .await
        .expect("send ok");
}

#[tokio::test]
async fn api_error_is_reported_with_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = notifier_for(&server).send_text("hi").await.unwrap_err();
    assert!(err.0.contains("400"), "{err}");
    assert!(err.0.contains("chat not found"), "{err}");
}

#[tokio::test]
async fn connection_failure_does_not_leak_token() {
    let notifier = TelegramNotifier::new(
        reqwest::Client::new(),
        "http://127.0.0.1:1",
        "secret-token",
        "4242",
    );
    let err = notifier.send_text("hi").await.unwrap_err();
    assert!(!err.to_string().contains("secret-token"), "{err}");
}

#[test]
fn type_name_is_telegram() {
    let notifier = TelegramNotifier::new(reqwest::Client::new(), "http://x", "t", "1");
    assert_eq!(notifier.type_name(), "telegram");
}
