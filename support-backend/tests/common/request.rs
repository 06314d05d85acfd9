// tests/common/request.rs
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
};
use serde_json::Value;

/// JSONボディ付きのHTTPリクエストを作成
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();

    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// ボディなしのGETリクエストを作成
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// マルチパートのアップロードリクエストを作成
///
/// `file` が None の場合はファイルパートを含めない。Content-Type が空文字ならヘッダーを省略する。
pub fn multipart_request(
    uri: &str,
    file: Option<(&str, &[u8], &str)>,
    fields: &[(&str, &str)],
) -> Request<Body> {
    let boundary = "----boundary";
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(b"------boundary\r\n");
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((file_name, content, content_type)) = file {
        body.extend_from_slice(b"------boundary\r\n");
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"; filename=\"");
        body.extend_from_slice(file_name.as_bytes());
        body.extend_from_slice(b"\"\r\n");
        if !content_type.is_empty() {
            body.extend_from_slice(b"Content-Type: ");
            body.extend_from_slice(content_type.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(b"------boundary--\r\n");

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

/// レスポンスボディをJSONとして読み出す
pub async fn response_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
