//! Exercises `HttpEndpoint` against a one-shot local HTTP server.

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use uavconf::client::{CalculationEndpoint, HttpEndpoint, SubmitError};
use uavconf::model::{ConfigurationPayload, FormData};

/// A request as the server saw it.
struct Captured {
    request_line: String,
    content_type: Option<String>,
    body: Value,
}

/// Accepts one connection, records the request, and replies with `status` and `body`.
async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/configure", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).await.unwrap();

        let mut content_length = 0;
        let mut content_type = None;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                let value = value.trim();
                match name.to_ascii_lowercase().as_str() {
                    "content-length" => content_length = value.parse().unwrap(),
                    "content-type" => content_type = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        let mut raw = vec![0; content_length];
        reader.read_exact(&mut raw).await.unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        Captured {
            request_line: request_line.trim_end().to_string(),
            content_type,
            body: serde_json::from_slice(&raw).unwrap(),
        }
    });

    (url, handle)
}

fn electric_payload() -> ConfigurationPayload {
    let form: FormData = [
        ("air_density", "1.225"),
        ("cruise_speed", "20"),
        ("system_type", "electric"),
        ("battery_capacity", "5000"),
        ("system_efficiency", "0.8"),
        ("fuel_mass", "3"),
    ]
    .into_iter()
    .collect();
    ConfigurationPayload::from_form(&form)
}

fn result_body() -> String {
    json!({
        "required_thrust": 12.5,
        "required_power": 340,
        "prop_theoretical_speed": 31.75,
        "flight_time_electric": 0.42,
        "flight_time_ice": null,
        "thrust_explained": "T",
        "power_explained": "P",
        "prop_speed_explained": "V",
        "flight_time_explained": "t"
    })
    .to_string()
}

#[tokio::test]
async fn posts_json_and_parses_result() {
    let (url, server) = serve_once("200 OK", result_body()).await;
    let endpoint = HttpEndpoint::new(url).unwrap();

    let result = endpoint.configure(&electric_payload()).await.unwrap();
    let seen = server.await.unwrap();

    assert_eq!(seen.request_line, "POST /configure HTTP/1.1");
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    assert_eq!(seen.body["system_type"], "electric");
    assert_eq!(seen.body["battery_capacity"], 5000);
    assert_eq!(seen.body["system_efficiency"], 0.8);
    assert_eq!(seen.body["air_density"], 1.225);
    assert_eq!(seen.body["fuel_mass"], Value::Null);
    assert_eq!(seen.body["bsfc"], Value::Null);

    assert_eq!(result.required_thrust, 12.5);
    assert_eq!(result.flight_time_electric, Some(0.42));
    assert_eq!(result.flight_time_ice, None);
}

#[tokio::test]
async fn non_success_status_is_server_error() {
    let (url, server) = serve_once("500 Internal Server Error", "{}".to_string()).await;
    let endpoint = HttpEndpoint::new(url).unwrap();

    let err = endpoint.configure(&electric_payload()).await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, SubmitError::Server(500)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let (url, server) = serve_once("200 OK", "<html>oops</html>".to_string()).await;
    let endpoint = HttpEndpoint::new(url).unwrap();

    let err = endpoint.configure(&electric_payload()).await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, SubmitError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/configure", listener.local_addr().unwrap());
    drop(listener);
    let endpoint = HttpEndpoint::new(url).unwrap();

    let err = endpoint.configure(&electric_payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
}
