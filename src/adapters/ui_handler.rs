use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    /// Serves the compiled Web UI. Unknown paths fall back to `index.html`
    /// so client-side routes survive a reload.
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = match uri.path().trim_start_matches('/') {
            "" => "index.html",
            path => path,
        };

        match Asset::get(path).map(|content| (path, content)) {
            Some((path, content)) => Self::respond(path, content.data),
            None => match Asset::get("index.html") {
                Some(content) => Self::respond("index.html", content.data),
                None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
            },
        }
    }

    fn respond(path: &str, data: std::borrow::Cow<'static, [u8]>) -> axum::response::Response {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        ([(header::CONTENT_TYPE, mime.as_ref().to_string())], data).into_response()
    }
}
