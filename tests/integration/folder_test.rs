//! Integration tests for folder tree, create, and delete endpoints.

use std::sync::Arc;

use chrono::Utc;
use http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use foldertree_core::config::AppConfig;
use foldertree_database::MemoryFolderStore;
use foldertree_entity::folder::Folder;

use crate::helpers::TestApp;

fn names(nodes: &Value) -> Vec<&str> {
    nodes
        .as_array()
        .expect("array")
        .iter()
        .map(|n| n["name"].as_str().expect("name"))
        .collect()
}

#[tokio::test]
async fn test_fresh_tree_contains_only_root() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert_eq!(names(data), vec!["Root"]);
    assert_eq!(data[0]["id"], app.root.id.to_string());
    assert_eq!(data[0]["isRoot"], true);
    assert_eq!(data[0]["parentId"], Value::Null);
    assert_eq!(data[0]["children"], json!([]));
}

#[tokio::test]
async fn test_nested_create_then_cascade_delete() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", app.root.id).await;
    let b = app.create_folder("B", a).await;
    let c = app.create_folder("C", b).await;

    let tree = app.request("GET", "/api/folders", None).await.body;
    let root = &tree["data"][0];
    assert_eq!(names(&tree["data"]), vec!["Root"]);
    assert_eq!(names(&root["children"]), vec!["A"]);
    assert_eq!(names(&root["children"][0]["children"]), vec!["B"]);
    assert_eq!(names(&root["children"][0]["children"][0]["children"]), vec!["C"]);
    assert_eq!(root["children"][0]["parentId"], app.root.id.to_string());

    let response = app.request("DELETE", &format!("/api/folders/{a}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(
        response.body["message"],
        "Folder and its children deleted successfully"
    );
    assert_eq!(response.body["data"]["deletedCount"], 3);

    for id in [a, b, c] {
        assert!(!app.exists(id).await);
    }

    let tree = app.request("GET", "/api/folders", None).await.body;
    assert_eq!(names(&tree["data"]), vec!["Root"]);
    assert_eq!(tree["data"][0]["children"], json!([]));
}

#[tokio::test]
async fn test_siblings_listed_in_creation_order() {
    let app = TestApp::new().await;
    for name in ["zeta", "alpha", "mid"] {
        app.create_folder(name, app.root.id).await;
    }

    let tree = app.request("GET", "/api/folders", None).await.body;
    assert_eq!(
        names(&tree["data"][0]["children"]),
        vec!["zeta", "alpha", "mid"]
    );
}

#[tokio::test]
async fn test_create_returns_trimmed_folder() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "  Reports  ", "parentId": app.root.id })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Folder created successfully");
    let data = &response.body["data"];
    assert_eq!(data["name"], "Reports");
    assert_eq!(data["parentId"], app.root.id.to_string());
    assert_eq!(data["isRoot"], false);
    assert!(data["createdAt"].is_string());
    assert!(data["updatedAt"].is_string());
}

#[tokio::test]
async fn test_whitespace_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "   ", "parentId": app.root.id })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Folder name is required");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/folders", Some(json!({ "parentId": app.root.id })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": 42 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_parent_is_not_found() {
    let app = TestApp::new().await;

    for parent in [json!(Uuid::new_v4()), json!("not-a-uuid")] {
        let response = app
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": "Docs", "parentId": parent })),
            )
            .await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Parent folder not found");
    }
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_second_parentless_folder_conflicts() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Elsewhere" })))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["success"], false);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_root_delete_is_forbidden() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", app.root.id).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{}", app.root.id), None)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Cannot delete root folder");
    assert!(app.exists(app.root.id).await);
    assert!(app.exists(a).await);
}

#[tokio::test]
async fn test_delete_unknown_folder_is_not_found() {
    let app = TestApp::new().await;

    for id in [Uuid::new_v4().to_string(), "garbage".to_string()] {
        let response = app
            .request("DELETE", &format!("/api/folders/{id}"), None)
            .await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Folder not found");
    }
}

#[tokio::test]
async fn test_delete_keeps_sibling_branches() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", app.root.id).await;
    let a1 = app.create_folder("A1", a).await;
    let b = app.create_folder("B", app.root.id).await;
    let b1 = app.create_folder("B1", b).await;

    let response = app.request("DELETE", &format!("/api/folders/{a}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    assert!(!app.exists(a).await);
    assert!(!app.exists(a1).await);
    assert!(app.exists(b).await);
    assert!(app.exists(b1).await);
}

#[tokio::test]
async fn test_dangling_parent_is_hidden_from_tree() {
    let now = Utc::now();
    let orphan = Folder {
        id: Uuid::new_v4(),
        name: "orphan".to_string(),
        parent_id: Some(Uuid::new_v4()),
        is_root: false,
        created_at: now,
        updated_at: now,
    };
    let app = TestApp::with_store(Arc::new(MemoryFolderStore::with_folders(vec![orphan]))).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(names(&response.body["data"]), vec!["Root"]);
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_nesting_past_max_depth_is_rejected() {
    let mut config = AppConfig::default();
    config.folders.max_depth = 5;
    let app = TestApp::with_config(Arc::new(MemoryFolderStore::new()), config).await;

    let mut parent = app.root.id;
    for level in 1..=5 {
        parent = app.create_folder(&format!("level-{level}"), parent).await;
    }

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "level-6", "parentId": parent })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.store.len().await, 6);

    let tree = app.request("GET", "/api/folders", None).await;
    assert_eq!(tree.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deep_chain_written_directly_still_reads() {
    let now = Utc::now();
    let root = Folder {
        id: Uuid::new_v4(),
        name: "Root".to_string(),
        parent_id: None,
        is_root: true,
        created_at: now,
        updated_at: now,
    };
    let mut folders = vec![root.clone()];
    let mut parent = root.id;
    for level in 1..=5_000 {
        let folder = Folder {
            id: Uuid::new_v4(),
            name: format!("level-{level}"),
            parent_id: Some(parent),
            is_root: false,
            created_at: now,
            updated_at: now,
        };
        parent = folder.id;
        folders.push(folder);
    }
    let mut config = AppConfig::default();
    config.folders.max_depth = 40;
    let store = Arc::new(MemoryFolderStore::with_folders(folders));
    let app = TestApp::with_config(store, config).await;
    assert_eq!(app.root.id, root.id);

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let mut depth = 0;
    let mut node = &response.body["data"][0];
    while let Some(child) = node["children"].get(0) {
        depth += 1;
        node = child;
    }
    assert_eq!(depth, 40);
}

#[tokio::test]
async fn test_padded_name_is_measured_after_trimming() {
    let app = TestApp::new().await;
    let name = "x".repeat(250);

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": format!("   {name}        "), "parentId": app.root.id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], name);

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "y".repeat(256), "parentId": app.root.id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
