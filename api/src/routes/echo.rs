use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, web};
use payloads::responses::EchoedRequest;

/// Describe the received request back to the caller, for checking what a
/// client actually put on the wire.
#[tracing::instrument(skip(request, body), fields(method = %request.method()))]
pub async fn echo(request: HttpRequest, body: web::Bytes) -> HttpResponse {
    let headers: BTreeMap<String, String> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
        })
        .collect();
    let body =
        (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned());

    HttpResponse::Ok().json(EchoedRequest {
        method: request.method().to_string(),
        headers,
        body,
    })
}
