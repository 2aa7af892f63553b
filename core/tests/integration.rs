//! Full CRUD lifecycle test against the live mock server.
//!
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq.

use todo_core::{ApiError, CreateTodo, HttpMethod, HttpResponse, TodoClient, TodoId, UpdateTodo};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data and the core client interprets the status.
fn execute(req: todo_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.unwrap_or_default();
    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Delete => agent.delete(&req.path).call(),
        HttpMethod::Post => agent.post(&req.path).content_type("application/json").send(body.as_bytes()),
        HttpMethod::Patch => agent.patch(&req.path).content_type("application/json").send(body.as_bytes()),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server(store: mock_server::Store) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, store).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = start_server(mock_server::Store::default());
    let client = TodoClient::new(&format!("http://{addr}"));

    // Step 1: list is empty.
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // Step 2: create, then list includes it.
    let req = client.build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.title, "Buy milk");
    let id = created.id.clone();

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.iter().any(|t| t.title == "Buy milk"));

    // Step 3: update title.
    let req = client.build_update_todo(&id, &UpdateTodo::title("Buy oat milk")).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "Buy oat milk");

    // Step 4: delete, then list no longer has it.
    client.parse_delete_todo(execute(client.build_delete_todo(&id))).unwrap();
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.iter().all(|t| t.id != id), "expected deleted id to be gone");

    // Step 5: delete again fails with the fixed message.
    let err = client.parse_delete_todo(execute(client.build_delete_todo(&id))).unwrap_err();
    assert!(matches!(err, ApiError::NotOk { status: 404 }));
    assert_eq!(err.to_string(), "Network response was not ok");
}

#[test]
fn update_leaves_other_items_alone() {
    let store = mock_server::Store::from_json(
        r#"[{"id":1,"title":"one"},{"id":2,"title":"two"},{"id":3,"title":"three","completed":false}]"#,
    )
    .unwrap();
    let addr = start_server(store);
    let client = TodoClient::new(&format!("http://{addr}"));

    let req = client.build_update_todo(&TodoId::from(3), &UpdateTodo::title("Updated")).unwrap();
    client.parse_update_todo(execute(req)).unwrap();

    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    let pairs: Vec<(TodoId, &str)> = todos.iter().map(|t| (t.id.clone(), t.title.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TodoId::from(1), "one"),
            (TodoId::from(2), "two"),
            (TodoId::from(3), "Updated"),
        ]
    );
    assert_eq!(todos[2].extra["completed"], serde_json::Value::Bool(false));
}
