//! Node address resolution
//!
//! Turns a user-entered [`EndpointAddress`] into the HTTP base URL of the
//! node's RPC API (`<scheme>://<host>:<port>/api/v0/`).
//!
//! Accepted notations:
//! - `/ip4/<addr>/tcp/<port>` and `/ip6/<addr>/tcp/<port>`
//! - `/dns/<host>/tcp/<port>`, `/dns4/...`, `/dns6/...`
//! - any of the above with a trailing `/http` or `/https`
//! - `http://host:port` / `https://host:port`, with or without a path

use std::net::{Ipv4Addr, Ipv6Addr};

use ipup_core::prelude::*;
use ipup_core::EndpointAddress;
use url::Url;

/// RPC path prefix appended to bare host URLs
pub const API_PATH: &str = "/api/v0/";

/// Resolve an address to the RPC base URL. The result always ends in `/` so
/// endpoint names can be joined onto it.
pub fn resolve_api_url(address: &EndpointAddress) -> Result<Url> {
    let raw = address.as_str().trim();

    if raw.is_empty() {
        return Err(Error::invalid_address(raw, "address is empty"));
    }

    if raw.starts_with('/') {
        return resolve_multiaddr(raw);
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return resolve_url(raw);
    }

    Err(Error::invalid_address(
        raw,
        "expected a multiaddr (/ip4/...) or an http(s):// URL",
    ))
}

fn resolve_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| Error::invalid_address(raw, e.to_string()))?;

    if url.host_str().is_none() {
        return Err(Error::invalid_address(raw, "URL has no host"));
    }

    let path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() {
        url.set_path(API_PATH);
    } else {
        url.set_path(&format!("{path}/"));
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn resolve_multiaddr(raw: &str) -> Result<Url> {
    let parts: Vec<&str> = raw.trim_end_matches('/').split('/').skip(1).collect();

    let (proto, host, transport, port, rest) = match parts.as_slice() {
        [proto, host, transport, port, rest @ ..] => (*proto, *host, *transport, *port, rest),
        _ => {
            return Err(Error::invalid_address(
                raw,
                "expected /<ip4|ip6|dns|dns4|dns6>/<host>/tcp/<port>",
            ))
        }
    };

    let host = match proto {
        "ip4" => host
            .parse::<Ipv4Addr>()
            .map(|ip| ip.to_string())
            .map_err(|_| Error::invalid_address(raw, format!("'{host}' is not an IPv4 address")))?,
        "ip6" => host
            .parse::<Ipv6Addr>()
            .map(|ip| format!("[{ip}]"))
            .map_err(|_| Error::invalid_address(raw, format!("'{host}' is not an IPv6 address")))?,
        "dns" | "dns4" | "dns6" if !host.is_empty() => host.to_string(),
        _ => {
            return Err(Error::invalid_address(
                raw,
                format!("unsupported protocol '/{proto}'"),
            ))
        }
    };

    if transport != "tcp" {
        return Err(Error::invalid_address(
            raw,
            format!("unsupported transport '/{transport}', expected /tcp"),
        ));
    }

    let port: u16 = port
        .parse()
        .map_err(|_| Error::invalid_address(raw, format!("'{port}' is not a valid port")))?;

    let scheme = match rest {
        [] | ["http"] => "http",
        ["https"] | ["tls", "http"] => "https",
        other => {
            return Err(Error::invalid_address(
                raw,
                format!("unsupported suffix '/{}'", other.join("/")),
            ))
        }
    };

    let url = format!("{scheme}://{host}:{port}{API_PATH}");
    Url::parse(&url).map_err(|e| Error::invalid_address(raw, e.to_string()))
}
