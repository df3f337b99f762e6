//! Build script for codefuture-site
//!
//! - Generates a build version for asset cache busting
//! - In release builds, minifies CSS using lightningcss

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../../public/css");
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    println!("cargo:rustc-env=BUILD_VERSION={}", build_version());

    #[cfg(not(debug_assertions))]
    {
        minify_css();
    }
}

/// Git short hash of HEAD, falling back to the build timestamp.
fn build_version() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .and_then(|output| output.status.success().then_some(output.stdout))
        .and_then(|stdout| String::from_utf8(stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| format!("{:x}", d.as_secs()))
                .unwrap_or_else(|_| "unknown".to_string())
        })
}

#[cfg(not(debug_assertions))]
fn minify_css() {
    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
    use std::fs;
    use std::path::Path;

    let css_dir = Path::new("../../public/css");
    let style_path = css_dir.join("style.css");

    let Ok(css) = fs::read_to_string(&style_path) else {
        return;
    };

    let Ok(mut stylesheet) = StyleSheet::parse(&css, ParserOptions::default()) else {
        return;
    };
    if stylesheet.minify(MinifyOptions::default()).is_err() {
        return;
    }

    let Ok(result) = stylesheet.to_css(PrinterOptions { minify: true, ..Default::default() }) else {
        return;
    };

    let _ = fs::write(css_dir.join("style.min.css"), result.code);
}
