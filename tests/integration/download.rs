use std::collections::HashMap;
use std::io::{Read, Write};

use pwa_icons::{download, DownloadOptions, Error, Fetch, HttpFetcher};

const LINK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#;

struct MapFetcher(HashMap<String, String>);

impl Fetch for MapFetcher {
    fn fetch(&self, url: &str) -> Result<String, Error> {
        self.0
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Http(format!("{}: status code 404", url)))
    }
}

fn options(dir: &std::path::Path, icons: &[&str]) -> DownloadOptions {
    DownloadOptions {
        icons_dir: dir.to_path_buf(),
        icons: icons.iter().map(|s| s.to_string()).collect(),
        url_template: "https://icons.test/{icon_name}.svg".to_string(),
    }
}

#[test]
fn saves_icons_and_fallbacks() {
    let dir = tempfile::tempdir().unwrap();
    let mut icons = HashMap::new();
    icons.insert("https://icons.test/link.svg".to_string(), LINK_SVG.to_string());
    icons.insert("https://icons.test/close.svg".to_string(), "<svg/>".to_string());

    let report = download(&options(dir.path(), &["link", "close"]), &MapFetcher(icons)).unwrap();

    assert_eq!(report.saved.len(), 2);
    assert!(report.failed.is_empty());

    let link = std::fs::read_to_string(dir.path().join("material/link.svg")).unwrap();
    assert_eq!(link, LINK_SVG);

    let script = std::fs::read_to_string(dir.path().join("material-icons-fallback.js")).unwrap();
    assert!(script.contains(&format!("    'link': `{}`,\n", LINK_SVG)));
    assert!(script.contains("    'close': `<svg/>`,\n"));
    assert!(script.find("'link'").unwrap() < script.find("'close'").unwrap());

    let css = std::fs::read_to_string(dir.path().join("material-icons-local.css")).unwrap();
    assert!(css.contains("font-family: 'Material Icons Local';"));
}

#[test]
fn failed_icon_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut icons = HashMap::new();
    icons.insert("https://icons.test/sync.svg".to_string(), "<svg/>".to_string());

    let report = download(&options(dir.path(), &["movie", "sync"]), &MapFetcher(icons)).unwrap();

    assert_eq!(report.saved, vec![dir.path().join("material").join("sync.svg")]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "movie");
    assert!(!dir.path().join("material/movie.svg").exists());

    let script = std::fs::read_to_string(&report.script).unwrap();
    assert!(!script.contains("'movie'"));
    assert!(script.contains("'sync'"));
}

/// Serves a single HTTP response on a random local port.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{}/{{icon_name}}.svg", addr)
}

#[test]
fn http_fetcher() {
    let dir = tempfile::tempdir().unwrap();
    let mut opt = options(dir.path(), &["link"]);
    opt.url_template = serve_once("200 OK", LINK_SVG);

    let report = download(&opt, &HttpFetcher::default()).unwrap();
    assert_eq!(report.saved.len(), 1);

    let link = std::fs::read_to_string(dir.path().join("material/link.svg")).unwrap();
    assert_eq!(link, LINK_SVG);
}

#[test]
fn http_fetcher_not_found() {
    let fetcher = HttpFetcher::default();
    let url = serve_once("404 Not Found", "").replace("{icon_name}", "link");

    let err = fetcher.fetch(&url).unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
