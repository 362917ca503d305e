use crate::url::ParsedUrl;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HttpVersion {
    major: u32,
    minor: u32,
}

impl HttpVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        HttpVersion { major, minor }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod http_version_tests {
    use super::HttpVersion;

    #[test]
    fn display() {
        assert_eq!(&HttpVersion::new(1, 1).to_string(), "HTTP/1.1");
        assert_eq!(&HttpVersion::new(1, 0).to_string(), "HTTP/1.0");
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

/// Terminator written after the request line and each header.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineEnding {
    /// `\r\n`, as HTTP/1.1 requires.
    CrLf,
    /// Bare `\n`. Most servers accept it.
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::CrLf
    }
}

/// A body-less request asking the server to close the connection once the
/// response is sent.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    version: HttpVersion,
    host: String,
}

impl HttpRequest {
    pub fn get(url: &ParsedUrl) -> Self {
        HttpRequest {
            method: HttpMethod::Get,
            path: url.path().into(),
            version: HttpVersion::new(1, 1),
            host: url.authority(),
        }
    }

    pub fn request_line(&self) -> String {
        format!("{} /{} {}", self.method, self.path, self.version)
    }

    pub fn serialize(&self, line_ending: LineEnding) -> String {
        let eol = line_ending.as_str();
        format!(
            "{}{eol}Host:{}{eol}Connection: close{eol}{eol}",
            self.request_line(),
            self.host,
            eol = eol
        )
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.serialize(LineEnding::default()))
    }
}
