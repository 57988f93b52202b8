#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `cfndoc` command pointed at a mock server and a
/// per-test cache file.
#[allow(dead_code)]
pub fn cfndoc_cmd(server: &MockServer, cache: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cfndoc"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("CFNDOC_DOCS_URL", format!("{}/template-reference.html", server.uri()));
    cmd.env("CFNDOC_BASE_URL", server.uri());
    cmd.env("CFNDOC_CACHE", cache);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Mount a table-of-contents page listing the given resources.
#[allow(dead_code)]
pub async fn mount_toc(server: &MockServer, names_and_hrefs: &[(&str, &str)]) {
    let mut html = String::from("<html><body>");
    for (name, href) in names_and_hrefs {
        html.push_str(&format!(r#"<a class="awstoc" href="{href}">{name}</a>"#));
    }
    html.push_str("</body></html>");

    Mock::given(method("GET"))
        .and(path("/template-reference.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Mount a detail page with the standard title/excerpt/syntax structure.
#[allow(dead_code)]
pub async fn mount_detail(server: &MockServer, href_path: &str, excerpt: &str, syntax: &str) {
    let html = format!(
        r#"<html><body>
             <div class="titlepage"><h1>Resource</h1></div>
             <p>{excerpt}</p>
             <div class="titlepage"><h2>Syntax</h2></div>
             <pre>{syntax}</pre>
           </body></html>"#
    );

    Mock::given(method("GET"))
        .and(path(href_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}
