// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Local copies of Material Icons for offline use.

use std::path::PathBuf;
use std::time::Duration;

use crate::Error;

/// Icons used by the web app.
pub const MATERIAL_ICONS: &[&str] = &[
    "link",
    "close",
    "play_arrow",
    "download",
    "movie",
    "fullscreen",
    "history",
    "play_circle_filled",
    "sync",
    "signal_wifi_off",
    "error",
];

/// Icon URL template. `{icon_name}` is replaced by the icon name.
pub const ICON_URL_TEMPLATE: &str =
    "https://fonts.gstatic.com/s/i/materialicons/{icon_name}/v1/24px.svg";

/// A source of remote text resources.
pub trait Fetch {
    /// Fetches `url` as a UTF-8 string.
    fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// A blocking HTTP fetcher.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Creates a fetcher with the specified timeout.
    pub fn new(timeout: Duration) -> Self {
        HttpFetcher {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, Error> {
        let response = self.agent.get(url).call()?;
        let text = response.into_string()?;
        Ok(text)
    }
}

/// Material Icons download options.
#[derive(Clone, Debug)]
pub struct DownloadOptions {
    /// The icons root.
    ///
    /// SVGs are saved into `<icons_dir>/material/`.
    ///
    /// Default: `./icons`
    pub icons_dir: PathBuf,

    /// Icon names.
    ///
    /// Default: [`MATERIAL_ICONS`]
    pub icons: Vec<String>,

    /// URL template with an `{icon_name}` placeholder.
    ///
    /// Default: [`ICON_URL_TEMPLATE`]
    pub url_template: String,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        DownloadOptions {
            icons_dir: PathBuf::from("./icons"),
            icons: MATERIAL_ICONS.iter().map(|s| s.to_string()).collect(),
            url_template: ICON_URL_TEMPLATE.to_string(),
        }
    }
}

impl DownloadOptions {
    /// Returns the URL of an icon.
    pub fn url_for(&self, icon_name: &str) -> String {
        self.url_template.replace("{icon_name}", icon_name)
    }

    /// Returns the offline fallback script path.
    pub fn script_path(&self) -> PathBuf {
        self.icons_dir.join("material-icons-fallback.js")
    }

    /// Returns the local font-face stylesheet path.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.icons_dir.join("material-icons-local.css")
    }
}

/// An outcome of [`download`].
#[derive(Default, Debug)]
pub struct DownloadReport {
    /// Saved SVG files.
    pub saved: Vec<PathBuf>,
    /// Icons that could not be fetched or saved, with the reason.
    pub failed: Vec<(String, String)>,
    /// The generated fallback script.
    pub script: PathBuf,
    /// The generated stylesheet.
    pub stylesheet: PathBuf,
}

/// Downloads icons and generates the offline fallback files.
///
/// A failed icon is logged and left out of the fallback map,
/// the remaining icons are still processed.
pub fn download(opt: &DownloadOptions, fetcher: &dyn Fetch) -> Result<DownloadReport, Error> {
    log::info!("Downloading Material Icons...");

    let icons_dir = opt.icons_dir.join("material");
    std::fs::create_dir_all(&icons_dir)?;

    let mut report = DownloadReport::default();
    let mut icon_map = Vec::new();
    for name in &opt.icons {
        log::info!("Downloading {} icon...", name);

        let path = icons_dir.join(format!("{}.svg", name));
        let result = fetcher.fetch(&opt.url_for(name)).and_then(|svg| {
            std::fs::write(&path, &svg)?;
            Ok(svg)
        });

        match result {
            Ok(svg) => {
                log::info!("Saved {}", path.display());
                icon_map.push((name.as_str(), svg));
                report.saved.push(path);
            }
            Err(e) => {
                log::warn!("Error downloading {}: {}", name, e);
                report.failed.push((name.clone(), e.to_string()));
            }
        }
    }

    report.script = opt.script_path();
    std::fs::write(&report.script, fallback_script(&icon_map))?;

    report.stylesheet = opt.stylesheet_path();
    std::fs::write(&report.stylesheet, LOCAL_STYLESHEET)?;

    log::info!(
        "Material Icons downloaded: {} saved, {} failed.",
        report.saved.len(),
        report.failed.len()
    );

    Ok(report)
}

/// A stylesheet that maps `.material-icons-local` to a locally installed font.
pub const LOCAL_STYLESHEET: &str = "\
/* Material Icons Local Fallback */
@font-face {
  font-family: 'Material Icons Local';
  font-style: normal;
  font-weight: 400;
  src: local('Material Icons'),
       local('MaterialIcons-Regular');
}

.material-icons-local {
  font-family: 'Material Icons Local';
  font-weight: normal;
  font-style: normal;
  font-size: 24px;
  line-height: 1;
  letter-spacing: normal;
  text-transform: none;
  display: inline-block;
  white-space: nowrap;
  word-wrap: normal;
  direction: ltr;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  text-rendering: optimizeLegibility;
}
";

const SCRIPT_HEAD: &str = "\
// Material Icons Offline Fallback
(function() {
  // Use the CDN while online.
  if (navigator.onLine) {
    return;
  }

  const iconMap = {
";

const SCRIPT_TAIL: &str = "\
  };

  function replaceIconsWithSvg() {
    document.querySelectorAll('.material-icons').forEach(icon => {
      const iconName = icon.textContent.trim();
      if (iconMap[iconName]) {
        const svgContainer = document.createElement('span');
        svgContainer.innerHTML = iconMap[iconName];
        svgContainer.className = 'material-icons-svg';
        svgContainer.style.display = 'inline-block';
        svgContainer.style.width = '24px';
        svgContainer.style.height = '24px';
        svgContainer.style.verticalAlign = 'middle';
        icon.parentNode.replaceChild(svgContainer, icon);
      }
    });
  }

  document.addEventListener('DOMContentLoaded', replaceIconsWithSvg);

  const observer = new MutationObserver(mutations => {
    mutations.forEach(mutation => {
      if (mutation.addedNodes.length) {
        replaceIconsWithSvg();
      }
    });
  });

  document.addEventListener('DOMContentLoaded', () => {
    observer.observe(document.body, { childList: true, subtree: true });
  });
})();
";

/// Builds the offline fallback script for `(name, svg)` pairs.
pub fn fallback_script(icons: &[(&str, String)]) -> String {
    let mut s = String::from(SCRIPT_HEAD);
    for (name, svg) in icons {
        s.push_str(&format!(
            "    '{}': `{}`,\n",
            escape_single_quoted(name),
            escape_template_literal(svg)
        ));
    }
    s.push_str(SCRIPT_TAIL);
    s
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
