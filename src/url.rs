//! Splitting of `[scheme://]host[:port][/path]` strings.
//!
//! Parsing never fails: no address validation is done here, anything that is
//! not a recognized separator simply ends up in one of the three fields.
use crate::error::{Error, Result};
use std::fmt;
use std::str;
use ::url::Url;

pub const DEFAULT_PORT: &str = "80";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl str::FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_ref() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            s => Err(Error::Parse(format!("Unknown scheme {}", s))),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// A url split into the pieces needed to connect and build the request line.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ParsedUrl {
    scheme: Option<Scheme>,
    hostname: String,
    port: String,
    path: String,
}

impl ParsedUrl {
    pub fn parse(raw: &str) -> Self {
        // Prefixes are matched case-sensitively, "HTTP://" is left alone.
        let (scheme, rest) = [Scheme::Http, Scheme::Https]
            .iter()
            .find_map(|&s| raw.strip_prefix(s.prefix()).map(|rest| (Some(s), rest)))
            .unwrap_or((None, raw));

        let (host_port, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        let (hostname, port) = match host_port.find(':') {
            Some(i) => (&host_port[..i], &host_port[i + 1..]),
            None => (host_port, DEFAULT_PORT),
        };

        ParsedUrl {
            scheme,
            hostname: hostname.into(),
            port: port.into(),
            path: path.into(),
        }
    }

    /// The scheme prefix that was stripped, if any.
    pub fn scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Port number or service name, `"80"` when the input had none.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Path without its leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn authority(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    /// Rebuilds a full url from the parts, going through the `url` crate so
    /// the result is normalized the same way any other url would be.
    pub fn to_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.to_string())?)
    }
}

impl From<&str> for ParsedUrl {
    fn from(raw: &str) -> Self {
        ParsedUrl::parse(raw)
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}://{}:{}/{}",
            self.scheme.unwrap_or(Scheme::Http),
            self.hostname,
            self.port,
            self.path
        )
    }
}

pub fn parse(raw: &str) -> ParsedUrl {
    ParsedUrl::parse(raw)
}
