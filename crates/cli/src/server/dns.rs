use dnsrpc_domain::config::ServerConfig;
use dnsrpc_infrastructure::dns::{DnsServerHandler, Transport};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const MAX_UDP_QUERY: usize = 4096;

pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr =
        format!("{}:{}", config.bind_address, config.dns_port).parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    if config.udp {
        let socket = Arc::new(create_udp_socket(domain, socket_addr)?);
        let handler = handler.clone();
        join_set.spawn(async move {
            run_udp_listener(socket, handler).await;
        });
    }

    if config.tcp {
        let listener = create_tcp_listener(domain, socket_addr)?;
        let idle_timeout = Duration::from_secs(config.tcp_idle_timeout_secs);
        let handler = handler.clone();
        join_set.spawn(async move {
            run_tcp_listener(listener, handler, idle_timeout).await;
        });
    }

    info!(
        bind_address = %socket_addr,
        udp = config.udp,
        tcp = config.tcp,
        "DNS server ready"
    );

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_QUERY];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                // ICMP port unreachable from an earlier reply surfaces here on some
                // platforms; it does not affect the socket.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw(&query, from.ip(), Transport::Udp).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let handler = handler.clone();
                tokio::spawn(async move {
                    if let Err(e) = serve_tcp_connection(stream, peer, handler, idle_timeout).await
                    {
                        debug!(client = %peer, error = %e, "TCP connection closed with error");
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "TCP accept error");
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    }
}

/// Serves length-prefixed messages until the client goes idle, closes, or
/// sends something unanswerable.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) -> io::Result<()> {
    loop {
        let mut len_buf = [0u8; 2];
        match tokio::time::timeout(idle_timeout, stream.read_exact(&mut len_buf)).await {
            Err(_) => return Ok(()),
            Ok(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Ok(Err(e)) => return Err(e),
            Ok(Ok(_)) => {}
        }

        let len = u16::from_be_bytes(len_buf) as usize;
        let mut query = vec![0u8; len];
        tokio::time::timeout(idle_timeout, stream.read_exact(&mut query))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "partial query"))??;

        let Some(response) = handler.handle_raw(&query, peer.ip(), Transport::Tcp).await else {
            return Ok(());
        };

        let mut framed = Vec::with_capacity(response.len() + 2);
        framed.extend_from_slice(&(response.len() as u16).to_be_bytes());
        framed.extend_from_slice(&response);
        stream.write_all(&framed).await?;
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
