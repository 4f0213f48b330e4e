use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    task::JoinSet,
};

use super::handler::{Response, handle_path};
use crate::{foundation::error::ImagenResult, render::font::FontProvider};

const MAX_REQUEST_HEAD: u64 = 16 * 1024;

/// `:port` listens on every interface; anything else is used as given.
pub fn normalize_listen_addr(addr: &str) -> String {
    let addr = addr.trim();
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_owned()
    }
}

/// Serve images on every address until a listener fails.
///
/// Each address gets its own accept loop. The first bind error is returned;
/// accept errors are logged and the loop keeps going.
pub async fn serve(addrs: &[String], fonts: FontProvider) -> ImagenResult<()> {
    let fonts = Arc::new(fonts);
    let mut listeners = JoinSet::new();
    for addr in addrs {
        let addr = normalize_listen_addr(addr);
        let fonts = Arc::clone(&fonts);
        listeners.spawn(async move {
            let listener = TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            tracing::info!("imagen listening on {}", addr);
            accept_loop(listener, fonts).await;
            Ok::<(), anyhow::Error>(())
        });
    }

    while let Some(joined) = listeners.join_next().await {
        joined.context("listener task panicked")??;
    }
    Ok(())
}

pub(crate) async fn accept_loop(listener: TcpListener, fonts: Arc<FontProvider>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let fonts = Arc::clone(&fonts);
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, peer, fonts).await {
                        tracing::warn!(peer = %peer, error = %e, "connection failed");
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "TCP accept error");
            }
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    fonts: Arc<FontProvider>,
) -> anyhow::Result<()> {
    let (read_half, mut write_half) = stream.split();
    let mut reader = BufReader::new(read_half.take(MAX_REQUEST_HEAD));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    loop {
        let mut header = String::new();
        let n = reader.read_line(&mut header).await?;
        if n == 0 || header.trim_end().is_empty() {
            break;
        }
    }

    let mut parts = request_line.split_whitespace();
    let (method, target) = (parts.next(), parts.next());
    let head_only = method == Some("HEAD");
    let response = match (method, target) {
        (Some("GET" | "HEAD"), Some(target)) => respond(target, fonts).await,
        (Some(_), Some(_)) => Response::text(405, "Method Not Allowed"),
        _ => Response::text(400, "Bad Request"),
    };
    tracing::debug!(
        peer = %peer,
        request = request_line.trim_end(),
        status = response.status,
        "request handled"
    );

    write_half.write_all(&response.to_http(head_only)).await?;
    write_half.shutdown().await?;
    Ok(())
}

async fn respond(target: &str, fonts: Arc<FontProvider>) -> Response {
    let raw_path = target.split(['?', '#']).next().unwrap_or_default();
    let path = match urlencoding::decode(raw_path) {
        Ok(path) => path.into_owned(),
        Err(e) => return Response::text(400, format!("Invalid URL: {e}")),
    };
    let joined = tokio::task::spawn_blocking(move || {
        handle_path(&path, &mut rand::thread_rng(), &fonts)
    })
    .await;
    match joined {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(path = raw_path, error = %e, "render task failed");
            Response::text(500, format!("Failed to generate image: {e}"))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/listen.rs"]
mod tests;
