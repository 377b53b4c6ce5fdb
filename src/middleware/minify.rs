use axum::{body::Body, response::Response};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::{body::to_bytes, http::header};
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: true,
            ..Default::default()
        });

        fn is_html(response: &Response<Body>) -> bool {
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("text/html"))
        }
    }
}

/// Minifies rendered pages in release builds. Debug builds keep the
/// templates readable in the browser.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            if is_html(&response) {
                let (parts, body) = response.into_parts();
                return match to_bytes(body, usize::MAX).await {
                    Ok(bytes) => Response::from_parts(parts, Body::from(minify_html::minify(&bytes, &MINIFY_CFG))),
                    Err(err) => {
                        tracing::error!(err = %err, "failed to buffer page for minification");
                        Response::from_parts(parts, Body::empty())
                    }
                };
            }
        }
    }

    response
}
