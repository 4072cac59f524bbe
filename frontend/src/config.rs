/// Configuration for the frontend application

/// Ideas API base - 编译时从环境变量读取
/// - Default: the public Suitmedia backend
/// - Override: `IDEAS_API_BASE=http://localhost:8000/api trunk serve`
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("IDEAS_API_BASE") {
    Some(url) => url,
    None => "https://suitmedia-backend.suitdev.com/api",
};

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/ideas-board/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/ideas-board/";

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::asset_path;

    #[test]
    fn asset_path_joins_once() {
        assert_eq!(asset_path("/static/logo.png"), format!("{}static/logo.png", super::BASE_URL));
        assert_eq!(asset_path("static/logo.png"), format!("{}static/logo.png", super::BASE_URL));
    }
}
