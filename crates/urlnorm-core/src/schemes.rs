//! Static per-scheme tables.

/// Default port for each scheme whose port can be elided.
const DEFAULT_PORTS: &[(&str, &str)] = &[
    ("http", "80"),
    ("itms", "80"),
    ("ws", "80"),
    ("https", "443"),
    ("wss", "443"),
    ("gopher", "70"),
    ("news", "119"),
    ("snews", "563"),
    ("nntp", "119"),
    ("snntp", "563"),
    ("ftp", "21"),
    ("telnet", "23"),
    ("prospero", "191"),
];

/// Schemes whose paths get `.`/`..`/`//` segment collapse.
const RELATIVE_SCHEMES: &[&str] = &[
    "http", "https", "ws", "wss", "itms", "news", "snews", "nntp", "snntp", "ftp", "file", "",
];

/// Schemes where a `;params` suffix on the last path segment is split off.
const PARAMS_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Schemes that always carry a `//` authority marker when recomposed.
const NETLOC_SCHEMES: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtsps", "rtspu", "rsync", "svn", "svn+ssh", "sftp",
    "nfs", "git", "git+ssh", "ws", "wss",
];

/// Known default port for `scheme`, as the raw digit string.
pub fn default_port(scheme: &str) -> Option<&'static str> {
    DEFAULT_PORTS
        .iter()
        .find(|(s, _)| *s == scheme)
        .map(|(_, port)| *port)
}

pub fn is_relative(scheme: &str) -> bool {
    RELATIVE_SCHEMES.contains(&scheme)
}

pub fn uses_params(scheme: &str) -> bool {
    PARAMS_SCHEMES.contains(&scheme)
}

pub fn uses_netloc(scheme: &str) -> bool {
    NETLOC_SCHEMES.contains(&scheme)
}
