//! Health endpoint tests for both services.

use serde_json::Value;

use comms::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn comms_health_is_constant_across_calls() {
    let shutdown = Shutdown::new();
    let comms_addr = common::spawn_comms_without_sidecar(&shutdown).await;
    let client = common::test_client();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let res = client
            .get(format!("http://{comms_addr}/health"))
            .send()
            .await
            .expect("comms unreachable");
        assert_eq!(res.status(), 200);
        bodies.push(res.json::<Value>().await.unwrap());
    }

    assert_eq!(bodies[0]["status"], "healthy");
    assert_eq!(bodies[0]["service"], "comms");
    assert_eq!(bodies[0]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);

    shutdown.trigger();
}

#[tokio::test]
async fn greeter_health_reports_its_own_service_name() {
    let shutdown = Shutdown::new();
    let greeter_addr = common::spawn_greeter(&shutdown).await;

    let res = common::test_client()
        .get(format!("http://{greeter_addr}/health"))
        .send()
        .await
        .expect("greeter unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "greeter");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    shutdown.trigger();
}

#[tokio::test]
async fn comms_health_does_not_touch_the_backend() {
    // Sidecar is unreachable; health must still be healthy.
    let shutdown = Shutdown::new();
    let comms_addr = common::spawn_comms_without_sidecar(&shutdown).await;

    let res = common::test_client()
        .get(format!("http://{comms_addr}/health"))
        .send()
        .await
        .expect("comms unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");

    shutdown.trigger();
}
