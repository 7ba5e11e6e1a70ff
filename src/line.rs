use core::fmt;

/// A parsed request line, such as `GET /path HTTP/1.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    http_version: String,
}

impl RequestLine {
    // Only the parser constructs these, after validating every field.
    pub(crate) fn new(method: &str, target: &str, http_version: &str) -> Self {
        RequestLine {
            method: method.to_string(),
            target: target.to_string(),
            http_version: http_version.to_string(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target. Always starts with `/`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The version without the `HTTP/` prefix, i.e. `"1.1"`.
    pub fn http_version(&self) -> &str {
        &self.http_version
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} HTTP/{}", self.method, self.target, self.http_version)
    }
}

#[cfg(feature = "http_crate")]
mod http_impls {
    use super::RequestLine;
    use crate::Error;

    impl TryFrom<&RequestLine> for http::Request<()> {
        type Error = Error;

        fn try_from(line: &RequestLine) -> Result<Self, Self::Error> {
            // Only 1.1 ever gets through the parser.
            let req = http::Request::builder()
                .method(line.method())
                .uri(line.target())
                .version(http::Version::HTTP_11)
                .body(())?;

            Ok(req)
        }
    }

    impl TryFrom<RequestLine> for http::Request<()> {
        type Error = Error;

        fn try_from(line: RequestLine) -> Result<Self, Self::Error> {
            (&line).try_into()
        }
    }
}
