use crate::config::{ClientConfig, HttpsPolicy};
use crate::error::{Error, Result};
use crate::protocol::HttpRequest;
use crate::url::{ParsedUrl, Scheme};
use dns_lookup::{getaddrinfo, AddrInfoHints, SockType};
use std::io;
use std::iter::FusedIterator;
use std::net::{SocketAddr, TcpStream};
use tracing::{debug, error, trace, warn};

/// Opens the byte stream a request is sent over.
pub trait Connector {
    type Stream: io::Read + io::Write;

    /// `port` is a port number or a service name, exactly as it appeared in
    /// the url.
    fn connect(&self, hostname: &str, port: &str) -> Result<Self::Stream>;
}

/// Plain TCP, resolved through the system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

/// Resolves `hostname` and `service` with `getaddrinfo`, so `service` may be
/// a port number or any name known to the system services database.
fn resolve(hostname: &str, service: &str) -> io::Result<Vec<SocketAddr>> {
    let hints = AddrInfoHints {
        socktype: SockType::Stream.into(),
        ..AddrInfoHints::default()
    };
    getaddrinfo(Some(hostname), Some(service), Some(hints))
        .map_err(io::Error::from)?
        .map(|info| info.map(|info| info.sockaddr))
        .collect()
}

fn connection_error(hostname: &str, port: &str, source: io::Error) -> Error {
    Error::Connection {
        host: hostname.into(),
        port: port.into(),
        source,
    }
}

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, hostname: &str, port: &str) -> Result<TcpStream> {
        let addrs = resolve(hostname, port).map_err(|e| connection_error(hostname, port, e))?;

        let mut last_error = None;
        for addr in addrs {
            debug!(%addr, "connecting");
            match TcpStream::connect(addr) {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    debug!(%addr, error = %e, "connect failed");
                    last_error = Some(e);
                }
            }
        }

        let e = last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("Failed to lookup {}", hostname),
            )
        });
        Err(connection_error(hostname, port, e))
    }
}

/// Writes the GET request for `url` and returns how many bytes went out.
///
/// A failed or short write is fatal for the fetch.
pub fn send_request<W: io::Write>(
    conn: &mut W,
    url: &ParsedUrl,
    config: &ClientConfig,
) -> Result<usize> {
    let request = HttpRequest::get(url);
    let bytes = request.serialize(config.line_ending());

    if let Err(e) = conn.write_all(bytes.as_bytes()).and_then(|()| conn.flush()) {
        error!(error = %e, "send");
        return Err(Error::Send(e));
    }

    debug!(
        request_line = %request.request_line(),
        bytes = bytes.len(),
        "request sent"
    );
    Ok(bytes.len())
}

/// Result of a single read on the connection.
#[derive(Debug)]
pub enum ReadOutcome {
    Chunk(Vec<u8>),
    /// The peer closed the connection.
    End,
    /// The read failed. Treated like `End` by `copy_response`.
    Failed(io::Error),
}

/// The response as a sequence of reads.
///
/// Yields a `Chunk` per non-empty read, then exactly one `End` or `Failed`,
/// then nothing.
pub struct ResponseChunks<R> {
    reader: R,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: io::Read> ResponseChunks<R> {
    pub fn new(reader: R, buffer_size: usize) -> Self {
        ResponseChunks {
            reader,
            buf: vec![0; buffer_size.max(1)],
            finished: false,
        }
    }
}

impl<R: io::Read> Iterator for ResponseChunks<R> {
    type Item = ReadOutcome;

    fn next(&mut self) -> Option<ReadOutcome> {
        if self.finished {
            return None;
        }
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return Some(ReadOutcome::End);
                }
                Ok(n) => return Some(ReadOutcome::Chunk(self.buf[..n].to_vec())),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(ReadOutcome::Failed(e));
                }
            }
        }
    }
}

impl<R: io::Read> FusedIterator for ResponseChunks<R> {}

pub fn read_all<R: io::Read>(conn: R, config: &ClientConfig) -> ResponseChunks<R> {
    ResponseChunks::new(conn, config.read_buffer_size())
}

/// How the read loop ended.
#[derive(Debug)]
pub enum Termination {
    Closed,
    Failed(io::Error),
}

impl Termination {
    pub fn is_graceful(&self) -> bool {
        match self {
            Termination::Closed => true,
            Termination::Failed(_) => false,
        }
    }
}

#[derive(Debug)]
pub struct ResponseSummary {
    pub bytes: u64,
    pub chunks: usize,
    pub termination: Termination,
}

/// Forwards everything read from `conn` to `out` until the connection ends.
///
/// Bytes are passed through untouched, each chunk is flushed as soon as it
/// arrives. Only a failure to write to `out` is an error.
pub fn copy_response<R: io::Read, W: io::Write>(
    conn: R,
    out: &mut W,
    config: &ClientConfig,
) -> Result<ResponseSummary> {
    let mut bytes = 0u64;
    let mut chunks = 0;
    let mut termination = Termination::Closed;

    for outcome in read_all(conn, config) {
        match outcome {
            ReadOutcome::Chunk(chunk) => {
                out.write_all(&chunk)
                    .and_then(|()| out.flush())
                    .map_err(Error::Output)?;
                trace!(len = chunk.len(), "chunk");
                bytes += chunk.len() as u64;
                chunks += 1;
            }
            ReadOutcome::End => break,
            ReadOutcome::Failed(e) => {
                debug!(error = %e, "read failed, ending response");
                termination = Termination::Failed(e);
                break;
            }
        }
    }

    Ok(ResponseSummary {
        bytes,
        chunks,
        termination,
    })
}

/// Connects, sends the request and streams the response into `out`.
///
/// The connection lives only inside this call and is closed on every path.
pub fn fetch<C: Connector, W: io::Write>(
    connector: &C,
    url: &ParsedUrl,
    config: &ClientConfig,
    out: &mut W,
) -> Result<ResponseSummary> {
    if url.scheme() == Some(Scheme::Https) {
        match config.https_policy() {
            HttpsPolicy::Reject => {
                return Err(Error::TlsUnsupported {
                    host: url.hostname().into(),
                })
            }
            HttpsPolicy::Downgrade => warn!(
                host = url.hostname(),
                port = url.port(),
                "https url, connecting without tls"
            ),
        }
    }

    let mut conn = connector.connect(url.hostname(), url.port())?;
    debug!(authority = %url.authority(), "connected");

    send_request(&mut conn, url, config)?;
    let summary = copy_response(&mut conn, out, config)?;

    debug!(
        bytes = summary.bytes,
        chunks = summary.chunks,
        graceful = summary.termination.is_graceful(),
        "response done"
    );
    Ok(summary)
}
