use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use reqline::{CancelHandle, RequestLine};

use crate::serve_single;

pub trait Acceptor {
    type Reader: io::Read + Send + 'static;
    type Writer: io::Write + Send + 'static;
    type Breaker: Breaker + Send + 'static;

    /// Wait for the next connection. `None` when there will be no more.
    #[allow(clippy::type_complexity)]
    fn accept(&mut self) -> io::Result<Option<(Self::Reader, Self::Writer, Self::Breaker)>>;
}

impl Breaker for () {
    fn disconnect(self) -> io::Result<()> {
        Ok(())
    }
}

pub trait Breaker {
    fn disconnect(self) -> io::Result<()>;
}

/// Serve connections from `acceptor` on a thread each, until it runs out.
///
/// Every connection gets one request line read, handed to `on_line`, and is
/// then disconnected. Cancelling `cancel` stops connections still waiting for
/// their request line.
pub fn serve<A, F>(mut acceptor: A, cancel: CancelHandle, on_line: F) -> io::Result<()>
where
    A: Acceptor,
    F: Fn(&RequestLine) + Send + Sync + 'static,
{
    let on_line = Arc::new(on_line);
    let mut running: Vec<JoinHandle<()>> = vec![];

    while let Some((r, w, b)) = acceptor.accept()? {
        running.retain(|h| !h.is_finished());

        let on_line = on_line.clone();
        let cancel = cancel.clone();

        let handle = thread::spawn(move || {
            match serve_single(r, w, &cancel) {
                Ok(line) => on_line(&line),
                Err(e) => warn!("Connection failed: {}", e),
            }

            if let Err(e) = b.disconnect() {
                debug!("Disconnect failed: {}", e);
            }
        });

        running.push(handle);
    }

    for h in running {
        if h.join().is_err() {
            error!("Connection thread panicked");
        }
    }

    Ok(())
}

pub mod tcp {
    use std::io;
    use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

    use super::{Acceptor, Breaker};

    /// Accepts TCP connections, numbering them for the logs.
    pub struct TcpAcceptor {
        listener: TcpListener,
        accepted: u64,
    }

    impl TcpAcceptor {
        pub fn new(listener: TcpListener) -> Self {
            TcpAcceptor {
                listener,
                accepted: 0,
            }
        }

        pub fn bind(addr: impl ToSocketAddrs) -> io::Result<Self> {
            Ok(Self::new(TcpListener::bind(addr)?))
        }

        pub fn local_addr(&self) -> io::Result<SocketAddr> {
            self.listener.local_addr()
        }

        /// Connections accepted so far.
        pub fn accepted(&self) -> u64 {
            self.accepted
        }
    }

    impl Acceptor for TcpAcceptor {
        type Reader = TcpStream;
        type Writer = TcpStream;
        type Breaker = TcpStreamBreaker;

        fn accept(&mut self) -> io::Result<Option<(Self::Reader, Self::Writer, Self::Breaker)>> {
            let (stream, peer) = self.listener.accept()?;
            self.accepted += 1;
            let id = self.accepted;
            info!("Connection {} accepted from {}", id, peer);

            let writer = stream.try_clone()?;
            let breaker = TcpStreamBreaker {
                stream: stream.try_clone()?,
                id,
                peer,
            };
            Ok(Some((stream, writer, breaker)))
        }
    }

    pub struct TcpStreamBreaker {
        stream: TcpStream,
        id: u64,
        peer: SocketAddr,
    }

    impl Breaker for TcpStreamBreaker {
        fn disconnect(self) -> io::Result<()> {
            info!("Connection {} to {} closed", self.id, self.peer);
            self.stream.shutdown(Shutdown::Both)
        }
    }
}
