//! Device endpoint tests.
//!
//! # Invariants
//! - IP and name lookups are last-match-wins
//! - An IP filter returns devices in the order the IPs were given
//! - `list_devices` skips devices without a name
//! - Adding a device posts `input_id`, `ip` and an optional `name` as a form

mod common;

use common::*;
use loggly_client::{Device, Input};
use wiremock::matchers::{basic_auth, body_string, method, path};

async fn mount_devices(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/devices/"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("devices/list_devices.json")),
        )
        .mount(server)
        .await;
}

async fn mount_inputs(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/inputs/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("inputs/list_inputs.json")),
        )
        .mount(server)
        .await;
}

fn input(id: &str) -> Input {
    serde_json::from_value(serde_json::json!({ "id": id, "name": "api" })).unwrap()
}

#[tokio::test]
async fn test_get_all_devices() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;

    let devices = client_for(&mock_server).get_all_devices(None).await.unwrap();

    assert_eq!(devices.len(), 4);
    assert_eq!(devices[0].id.as_deref(), Some("441"));
    assert_eq!(devices[0].input_id.as_deref(), Some("9012"));
    assert_eq!(devices[2].input_id.as_deref(), Some("9014"));
    assert_eq!(devices[1].name, None);
}

#[tokio::test]
async fn test_get_all_devices_filtered_by_ip() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;

    let devices = client_for(&mock_server)
        .get_all_devices(Some(&["10.0.0.5"]))
        .await
        .unwrap();

    let ids: Vec<_> = devices.iter().map(|d| d.id.as_deref().unwrap()).collect();
    assert_eq!(ids, ["443", "444"]);
}

#[tokio::test]
async fn test_get_all_devices_filter_follows_ip_order() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;

    let devices = client_for(&mock_server)
        .get_all_devices(Some(&["10.0.0.5", "192.168.1.10"]))
        .await
        .unwrap();

    let ips: Vec<_> = devices.iter().map(|d| d.ip.as_str()).collect();
    assert_eq!(ips, ["10.0.0.5", "10.0.0.5", "192.168.1.10"]);
    let ids: Vec<_> = devices.iter().map(|d| d.id.as_deref().unwrap()).collect();
    assert_eq!(ids, ["443", "444", "441"]);
}

#[tokio::test]
async fn test_list_devices_skips_unnamed() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;

    let names = client_for(&mock_server).list_devices().await.unwrap();
    assert_eq!(names, ["web-01", "worker", "worker"]);
}

#[tokio::test]
async fn test_device_lookups_last_match_wins() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;
    let client = client_for(&mock_server);

    assert_eq!(client.get_device_id_by_ip("10.0.0.5").await.unwrap(), "444");
    assert_eq!(client.get_device_id_by_name("worker").await.unwrap(), "444");
    assert_eq!(
        client.get_device_by_name("web-01").await.unwrap().ip,
        "192.168.1.10"
    );
}

#[tokio::test]
async fn test_device_lookup_misses() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;
    let client = client_for(&mock_server);

    let err = client.get_device_by_ip("1.2.3.4").await.unwrap_err();
    assert_eq!(err.to_string(), "No device found with ip: 1.2.3.4");

    let err = client.get_device_by_name("ghost").await.unwrap_err();
    assert_eq!(err.to_string(), "No device found with name: ghost");
}

#[tokio::test]
async fn test_get_device_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/devices/450/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("devices/add_device.json")),
        )
        .mount(&mock_server)
        .await;

    let device = client_for(&mock_server).get_device("450").await.unwrap();
    assert_eq!(device.name.as_deref(), Some("edge"));
}

#[tokio::test]
async fn test_add_ip_to_input_posts_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/devices/"))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(body_string("input_id=9013&ip=172.16.0.9&name=edge"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("devices/add_device.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let device = client_for(&mock_server)
        .add_ip_to_input("172.16.0.9", &input("9013"), Some("edge"))
        .await
        .unwrap();

    assert_eq!(device.id.as_deref(), Some("450"));
}

#[tokio::test]
async fn test_add_device_without_name_omits_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/devices/"))
        .and(body_string("input_id=9013&ip=172.16.0.9"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("devices/add_device.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .add_device_to_input(&Device::from_ip("172.16.0.9"), &input("9013"), None)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_add_ip_to_input_by_name_resolves_input() {
    let mock_server = MockServer::start().await;
    mount_inputs(&mock_server).await;

    // "web" resolves to the last input with that name.
    Mock::given(method("POST"))
        .and(path("/api/devices/"))
        .and(body_string("input_id=9014&ip=172.16.0.9"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("devices/add_device.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .add_ip_to_input_by_name("172.16.0.9", "web", None)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_this_device_add_and_remove() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/inputs/9013/adddevice/"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("devices/add_device.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/inputs/9013/removedevice/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let input = input("9013");

    let device = client.add_this_device_to_input(&input).await.unwrap();
    assert_eq!(device.ip, "172.16.0.9");

    let removed = client.remove_this_device_from_input(&input).await.unwrap();
    assert_eq!(removed, "204:");
}

#[tokio::test]
async fn test_delete_device_by_ip() {
    let mock_server = MockServer::start().await;
    mount_devices(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/devices/444/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .delete_device_by_ip("10.0.0.5")
        .await
        .unwrap();

    assert_eq!(result, "204:");
}

#[tokio::test]
async fn test_delete_missing_device_is_gone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/devices/999/"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let mut device = Device::from_ip("1.1.1.1");
    device.id = Some("999".to_string());

    let err = client_for(&mock_server)
        .delete_device(&device)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Vendor { status: 410, message: "Gone", .. }));
}
