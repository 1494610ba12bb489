//! Full browser-style session against the live server.
//!
//! # Design
//! Starts the server on a random port with a fresh in-memory store, then
//! walks an add / toggle / rotate / remove session over real HTTP using
//! ureq. Redirect following is disabled so the redirect responses
//! themselves can be asserted.

use todo_server::TodoStore;

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .max_redirects(0)
        .build()
        .new_agent()
}

#[test]
fn browser_session() {
    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = TodoStore::in_memory().await.unwrap();
            store.migrate().await.unwrap();
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, store, "public".into()).await
        })
        .unwrap();
    });

    let agent = agent();
    let base = format!("http://{addr}");

    // Step 2: the list starts empty.
    let mut resp = agent.get(format!("{base}/")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("Todos"));
    assert!(!body.contains("/todo/"));

    // Step 3: add a todo; the form redirects back to the list.
    let resp = agent
        .post(format!("{base}/add-todo"))
        .content_type("application/x-www-form-urlencoded")
        .send("title=Buy+milk".as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("location").unwrap(), "/");

    // Step 4: the list now links to the new todo; pull its id out.
    let mut resp = agent.get(format!("{base}/")).call().unwrap();
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("Buy milk"));
    let marker = "/todo/";
    let start = body.find(marker).unwrap() + marker.len();
    let id = &body[start..start + 36];

    // Step 5: finish it; no referrer, so back to the list.
    let resp = agent
        .get(format!("{base}/toggle-todo/{id}"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("location").unwrap(), "/");

    // Step 6: bump its priority; the detail page reflects both changes.
    let resp = agent
        .get(format!("{base}/change-priority/{id}"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 303);

    let mut resp = agent.get(format!("{base}/todo/{id}")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body = resp.body_mut().read_to_string().unwrap();
    assert!(body.contains("done"));
    assert!(body.contains("high"));

    // Step 7: remove it; the detail page is gone.
    let resp = agent
        .get(format!("{base}/remove-todo/{id}"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 303);

    let resp = agent.get(format!("{base}/todo/{id}")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
