//! Static site serving module
//!
//! Loads site assets from disk with directory-traversal protection, index
//! file fallback, MIME detection, and ETag-based conditional responses.

use crate::config::SiteConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a site asset for a GET/HEAD request
pub async fn serve(ctx: &RequestContext<'_>, site: &SiteConfig) -> Response<Full<Bytes>> {
    match load(&site.root, ctx.path, &site.index_files).await {
        Some((content, content_type)) => {
            let etag = cache::generate_etag(&content);
            if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
                return http::build_304_response(&etag);
            }
            http::build_cached_response(Bytes::from(content), content_type, &etag, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a site asset, trying index files for directory paths
///
/// Returns `None` for anything that does not resolve to a regular file
/// inside the site root.
pub async fn load(
    site_root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and drop any parent-directory components
    let relative_path = path.trim_start_matches('/').replace("..", "");

    let root_canonical = match Path::new(site_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Site root not found or inaccessible '{site_root}': {e}"
            ));
            return None;
        }
    };

    let mut file_path = Path::new(site_root).join(&relative_path);

    // Directory paths fall back to the first index file present
    if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // Missing files are ordinary 404s, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }
    if !file_path_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type =
        mime::get_content_type(file_path_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}
