use lumina_assistant::{AssistantClient, AssistantError, Role, WireMessage};

fn client(endpoint: String) -> AssistantClient {
    AssistantClient::new(
        endpoint,
        "test-model".to_string(),
        "test-key".to_string(),
        "You are a test assistant.".to_string(),
    )
    .unwrap()
}

fn user(content: &str) -> WireMessage {
    WireMessage {
        role: Role::User,
        content: content.to_string(),
    }
}

#[tokio::test]
async fn a_successful_response_yields_the_first_choice_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"Try the **Aura Wireless Headphones**."}}]}"#,
        )
        .create_async()
        .await;

    let client = client(format!("{}/v1/chat/completions", server.url()));
    let reply = client.complete(&[user("any headphones?")]).await.unwrap();

    assert_eq!(reply, "Try the **Aura Wireless Headphones**.");
    mock.assert_async().await;
}

#[tokio::test]
async fn the_system_prompt_leads_the_message_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "You are a test assistant."},
                {"role": "user", "content": "hello"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#)
        .create_async()
        .await;

    let client = client(format!("{}/v1/chat/completions", server.url()));
    client.complete(&[user("hello")]).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn a_server_error_maps_to_the_status_variant() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = client(format!("{}/v1/chat/completions", server.url()));
    let err = client.complete(&[user("hello")]).await.unwrap_err();

    match err {
        AssistantError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn an_empty_choice_list_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = client(format!("{}/v1/chat/completions", server.url()));
    let err = client.complete(&[user("hello")]).await.unwrap_err();

    assert!(matches!(err, AssistantError::EmptyReply));
}
