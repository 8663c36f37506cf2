//! End-to-end navigation behavior against the real server.

use std::time::Duration;

use serde_json::Value;

use nav_shell::config::{AppConfig, RouteConfig};

mod common;

#[tokio::test]
async fn test_root_mounts_primary_view() {
    let shell = common::spawn_shell(AppConfig::default()).await;

    let res = reqwest::get(format!("{}/", shell.base_url())).await.unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"data-view="task-one""#));
    assert!(body.contains("<title>Task One</title>"));
}

#[tokio::test]
async fn test_secondary_path_mounts_secondary_view() {
    let shell = common::spawn_shell(AppConfig::default()).await;

    let res = reqwest::get(format!("{}/task-2", shell.base_url()))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body = res.text().await.unwrap();
    assert!(body.contains(r#"data-view="task-two""#));
}

#[tokio::test]
async fn test_unknown_path_redirects_to_root() {
    let shell = common::spawn_shell(AppConfig::default()).await;
    let client = common::manual_redirect_client();

    for path in ["/foo", "/a/b/c", "/unknown/path"] {
        let res = client
            .get(format!("{}{}", shell.base_url(), path))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 307, "path {path}");
        assert_eq!(res.headers().get("location").unwrap(), "/");
    }

    // A client that follows the redirect ends up on the primary view.
    let res = reqwest::get(format!("{}/unknown/path", shell.base_url()))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains(r#"data-view="task-one""#));
}

#[tokio::test]
async fn test_resolve_endpoint_chases_redirects() {
    let shell = common::spawn_shell(AppConfig::default()).await;

    let res = reqwest::get(format!(
        "{}/_nav/resolve?path=/a/b/c",
        shell.base_url()
    ))
    .await
    .unwrap();
    assert_eq!(res.status(), 200);
    let resolution: Value = res.json().await.unwrap();
    assert_eq!(resolution["view"], "task-one");
    assert_eq!(resolution["route"], "root");
    assert_eq!(resolution["redirects"], serde_json::json!(["/"]));
}

#[tokio::test]
async fn test_routes_endpoint_preserves_declared_order() {
    let shell = common::spawn_shell(AppConfig::default()).await;

    let res = reqwest::get(format!("{}/_nav/routes", shell.base_url()))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let routes: Value = res.json().await.unwrap();
    let routes = routes.as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0]["pattern"], "/");
    assert_eq!(routes[1]["pattern"], "/task-2");
    // The catch-all must be last; anywhere earlier it would shadow the
    // entries after it.
    assert_eq!(routes[2]["pattern"], "*");
    assert_eq!(routes[2]["target"]["redirect"], "/");
}

#[tokio::test]
async fn test_named_pattern_params_surface_in_resolution() {
    let mut config = AppConfig::default();
    config.routes.insert(
        2,
        RouteConfig {
            name: "sector".into(),
            pattern: "/sectors/:id".into(),
            view: Some("task-two".into()),
            redirect: None,
        },
    );
    let shell = common::spawn_shell(config).await;

    let res = reqwest::get(format!(
        "{}/_nav/resolve?path=/sectors/42",
        shell.base_url()
    ))
    .await
    .unwrap();
    let resolution: Value = res.json().await.unwrap();
    assert_eq!(resolution["view"], "task-two");
    assert_eq!(resolution["params"]["id"], "42");
}

#[tokio::test]
async fn test_config_update_swaps_live_table() {
    let shell = common::spawn_shell(AppConfig::default()).await;
    let client = common::manual_redirect_client();
    let url = format!("{}/extra", shell.base_url());

    // Before the update: swallowed by the catch-all.
    let res = client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), 307);

    let mut config = AppConfig::default();
    config.routes.insert(
        2,
        RouteConfig {
            name: "extra".into(),
            pattern: "/extra".into(),
            view: Some("task-two".into()),
            redirect: None,
        },
    );
    shell.updates.send(config).unwrap();

    // The swap is asynchronous; poll briefly.
    let mut swapped = false;
    for _ in 0..50 {
        let res = client.get(&url).send().await.unwrap();
        if res.status() == 200 {
            assert!(res.text().await.unwrap().contains(r#"data-view="task-two""#));
            swapped = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(swapped, "table was not swapped after config update");
}
