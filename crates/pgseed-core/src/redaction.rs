use serde::{Deserialize, Serialize};

/// Connection metadata with secrets redacted, safe to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactedConnection {
    pub engine: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub redacted: String,
}

/// Redact secrets from a connection string while extracting non-sensitive metadata.
pub fn redact_connection_string(conn: &str) -> RedactedConnection {
    let Some(parts) = UrlParts::parse(conn) else {
        return RedactedConnection {
            engine: None,
            user: None,
            host: None,
            port: None,
            database: None,
            redacted: redact_query_params(conn),
        };
    };

    let mut redacted = format!("{}://", parts.scheme);
    if let Some(user) = parts.user {
        redacted.push_str(user);
        if parts.password.is_some() {
            redacted.push_str(":***");
        }
        redacted.push('@');
    }
    if let Some(host) = parts.host {
        redacted.push_str(host);
    }
    if let Some(port) = parts.port {
        redacted.push(':');
        redacted.push_str(port);
    }
    if let Some(database) = parts.database {
        redacted.push('/');
        redacted.push_str(database);
    }
    if let Some(query) = parts.query {
        redacted.push('?');
        redacted.push_str(query);
    }

    RedactedConnection {
        engine: Some(parts.scheme.to_string()),
        user: parts.user.map(str::to_string),
        host: parts.host.map(str::to_string),
        port: parts.port.and_then(|port| port.parse().ok()),
        database: parts.database.map(str::to_string),
        redacted: redact_query_params(&redacted),
    }
}

fn redact_query_params(conn: &str) -> String {
    let Some(query_start) = conn.find('?') else {
        return conn.to_string();
    };

    let (base, query) = conn.split_at(query_start + 1);
    let mut redacted_params = Vec::new();

    for pair in query.split('&') {
        let mut iter = pair.splitn(2, '=');
        let key = iter.next().unwrap_or("");
        let value = iter.next().unwrap_or("");
        if is_sensitive_key(key) {
            redacted_params.push(format!("{key}=***"));
        } else if value.is_empty() {
            redacted_params.push(key.to_string());
        } else {
            redacted_params.push(format!("{key}={value}"));
        }
    }

    format!("{base}{}", redacted_params.join("&"))
}

fn is_sensitive_key(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "password" | "pass" | "token" | "api_key" | "apikey"
    )
}

/// Borrowed components of a connection URL, split only far enough to mask
/// the password.
#[derive(Debug, Default, PartialEq, Eq)]
struct UrlParts<'a> {
    scheme: &'a str,
    user: Option<&'a str>,
    password: Option<&'a str>,
    host: Option<&'a str>,
    port: Option<&'a str>,
    database: Option<&'a str>,
    query: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    fn parse(conn: &'a str) -> Option<Self> {
        let scheme_end = conn.find("://")?;
        let mut parts = UrlParts {
            scheme: &conn[..scheme_end],
            ..Default::default()
        };
        let mut rest = &conn[scheme_end + 3..];

        if let Some(query_start) = rest.find('?') {
            parts.query = Some(&rest[query_start + 1..]);
            rest = &rest[..query_start];
        }

        let (auth_part, host_part) = match rest.rfind('@') {
            Some(at_idx) => (&rest[..at_idx], &rest[at_idx + 1..]),
            None => ("", rest),
        };
        if !auth_part.is_empty() {
            match auth_part.split_once(':') {
                Some((user, password)) => {
                    parts.user = Some(user);
                    parts.password = Some(password);
                }
                None => parts.user = Some(auth_part),
            }
        }

        let (host_port, path) = host_part.split_once('/').unwrap_or((host_part, ""));
        if !host_port.is_empty() {
            match host_port.rsplit_once(':') {
                Some((host, port)) => {
                    parts.host = Some(host);
                    parts.port = Some(port);
                }
                None => parts.host = Some(host_port),
            }
        }
        if !path.is_empty() {
            parts.database = Some(path);
        }

        Some(parts)
    }
}
