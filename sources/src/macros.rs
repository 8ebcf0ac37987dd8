//! Define our own macros to simplify the HTTP code
//!

/// Call the HTTP client with the proper arguments
///
/// - auth call to fetch data with an API key header
///
#[macro_export]
macro_rules! http_get_key {
    ($self:ident, $url:ident, $key:expr) => {
        $self
            .client
            .clone()
            .get($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .header("content-type", "application/json")
            .header("X-API-KEY", $key)
            .send()
    };
}

/// Call the HTTP client with the proper arguments
///
/// - unauth call to submit a JSON payload
///
#[macro_export]
macro_rules! http_post {
    ($self:ident, $url:ident, $data:expr) => {
        $self
            .client
            .clone()
            .post($url)
            .header(
                "user-agent",
                format!("{}/{}", crate_name!(), crate_version!()),
            )
            .header("content-type", "application/json")
            .json($data)
            .send()
    };
}
