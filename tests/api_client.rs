#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use taskboard::api::user::{ProfileError, ProfileUpdate};
    use taskboard::api::{ApiError, TaskRemote, TasksApi, UserApi};
    use taskboard::libs::task::{NewTask, Status, TaskFilter, TaskPatch, TaskStatus};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const TASK_JSON: &str = r#"{"id":"t1","title":"Write docs","description":null,"status":"completed","due_date":null,"created_at":"2024-01-10T08:30:00+00:00","user_id":"u1"}"#;

    /// Serves one canned response and hands back the raw request it received.
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            request
        });
        (format!("http://{}/api", addr), handle)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).into_owned();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        line.to_ascii_lowercase()
                            .strip_prefix("content-length:")
                            .map(|value| value.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn body_of(request: &str) -> serde_json::Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_list_with_filter_and_token() {
        let (url, server) = serve_once("200 OK", format!(r#"{{"tasks":[{}]}}"#, TASK_JSON)).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        let tasks = api.list(TaskFilter::ByStatus(Status::Completed)).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/tasks?status=completed HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer token123"));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Known(Status::Completed));
    }

    #[tokio::test]
    async fn test_list_all_without_token() {
        let (url, server) = serve_once("200 OK", r#"{"tasks":[]}"#.to_string()).await;
        let api = TasksApi::new(&format!("{}/", url), None);

        let tasks = api.list(TaskFilter::All).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/tasks HTTP/1.1"));
        assert!(!request.to_ascii_lowercase().contains("authorization:"));
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let (url, server) = serve_once("201 Created", format!(r#"{{"task":{}}}"#, TASK_JSON)).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        let task = api.create(&NewTask::new("Write docs")).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /api/tasks HTTP/1.1"));
        let body = body_of(&request);
        assert_eq!(body["title"], "Write docs");
        assert_eq!(body["status"], "pending");
        assert_eq!(task.id, "t1");
    }

    #[tokio::test]
    async fn test_update_sends_only_status() {
        let (url, server) = serve_once("200 OK", format!(r#"{{"task":{}}}"#, TASK_JSON)).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        api.update("t1", &TaskPatch::status(Status::Completed)).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("PUT /api/tasks/t1 HTTP/1.1"));
        assert_eq!(body_of(&request), serde_json::json!({ "status": "completed" }));
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_task() {
        let (url, server) = serve_once("200 OK", format!(r#"{{"task":{}}}"#, TASK_JSON)).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        let deleted = api.delete("t1").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("DELETE /api/tasks/t1 HTTP/1.1"));
        assert_eq!(deleted.title, "Write docs");
    }

    #[tokio::test]
    async fn test_error_envelope_is_mapped() {
        let body = r#"{"error":"Validation error","message":"Title is required","details":"title"}"#;
        let (url, server) = serve_once("400 Bad Request", body.to_string()).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        let err = api.update("t1", &TaskPatch::status(Status::Pending)).await.unwrap_err();
        server.await.unwrap();

        match err {
            ApiError::Validation(message) => assert_eq!(message, "Title is required (title)"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_is_mapped() {
        let (url, server) = serve_once("404 Not Found", r#"{"error":"Task not found"}"#.to_string()).await;
        let api = TasksApi::new(&url, Some("token123".to_string()));

        let err = api.delete("missing").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::NotFound(message) if message == "Task not found"));
    }

    #[test]
    fn test_from_response_status_mapping() {
        assert!(matches!(
            ApiError::from_response(StatusCode::UNAUTHORIZED, r#"{"error":"Unauthorized","message":"Invalid token"}"#),
            ApiError::Unauthorized(message) if message == "Invalid token"
        ));
        assert!(matches!(
            ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
            ApiError::Server { status: 500, message } if message == "Internal Server Error"
        ));
        assert!(matches!(
            ApiError::from_response(StatusCode::BAD_GATEWAY, r#"{"error":"Upstream down"}"#),
            ApiError::Server { status: 502, message } if message == "Upstream down"
        ));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let body = r#"{"user":{"id":"u1","email":"ann@example.com","user_metadata":{"full_name":"Ann"}}}"#;
        let (url, server) = serve_once("200 OK", body.to_string()).await;
        let api = UserApi::new(&url, Some("token123".to_string()));

        let update = ProfileUpdate {
            email: Some(" ann@example.com ".to_string()),
            full_name: Some("Ann".to_string()),
            metadata: None,
        };
        let profile = api.update_profile(update).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("PUT /api/user HTTP/1.1"));
        assert_eq!(
            body_of(&request),
            serde_json::json!({ "email": "ann@example.com", "full_name": "Ann" })
        );
        assert_eq!(profile.full_name(), Some("Ann"));
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let (url, server) = serve_once("200 OK", r#"{"deleted":true}"#.to_string()).await;
        let api = UserApi::new(&url, Some("token123".to_string()));

        assert!(api.delete_profile().await.unwrap());
        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /api/user HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_invalid_profile_update_is_not_sent() {
        // Nothing listens here; validation must fail before any request.
        let api = UserApi::new("http://127.0.0.1:9/api", Some("token123".to_string()));

        let empty = api.update_profile(ProfileUpdate::default()).await.unwrap_err();
        let blank_email = api
            .update_profile(ProfileUpdate {
                email: Some("  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(empty, ApiError::InvalidProfile(ProfileError::NoFieldsToUpdate)));
        assert!(matches!(blank_email, ApiError::InvalidProfile(ProfileError::EmptyEmail)));
    }
}
