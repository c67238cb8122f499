use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use walkdir::WalkDir;

/// Crates the domain must never depend on: UI, runtime and browser bindings
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tokio",
    "web-sys",
    "js-sys",
    "wasm-bindgen",
    "wasm-bindgen-futures",
    "gloo-net",
    "gloo-timers",
    "reqwest",
    "tracing-subscriber",
];

const DOMAIN_PACKAGE: &str = "iwe-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("package {DOMAIN_PACKAGE} not found"))?;

    let mut violations = manifest_violations(domain);

    let src_dir = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    violations.extend(source_violations(&src_dir)?);

    if violations.is_empty() {
        println!("arch-check: {DOMAIN_PACKAGE} is free of UI and runtime dependencies");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

/// Normal (non-dev) dependencies on forbidden crates
fn manifest_violations(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| FORBIDDEN_DOMAIN_DEPS.contains(&d.name.as_str()))
        .map(|d| format!("{} depends on {}", package.name, d.name))
        .collect()
}

/// `use` of a forbidden crate anywhere under `dir`
fn source_violations(dir: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = FORBIDDEN_DOMAIN_DEPS
        .iter()
        .map(|name| name.replace('-', "_"))
        .collect::<Vec<_>>()
        .join("|");
    let re = regex_lite::Regex::new(&format!(r"\b(?:use\s+|extern\s+crate\s+)(?:::)?({pattern})\b"))
        .context("building source pattern")?;

    let mut violations = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (line_no, line) in text.lines().enumerate() {
            if let Some(found) = re.captures(line).and_then(|c| c.get(1)) {
                violations.push(format!(
                    "{}:{} uses {}",
                    path.display(),
                    line_no + 1,
                    found.as_str()
                ));
            }
        }
    }
    Ok(violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(name: &str, kind: Option<&str>) -> Dependency {
        Dependency {
            name: name.to_string(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_dev_dependencies_are_allowed() {
        let package = Package {
            name: DOMAIN_PACKAGE.to_string(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: vec![
                dep("serde", None),
                dep("tokio", Some("dev")),
                dep("dioxus", None),
            ],
        };

        assert_eq!(
            manifest_violations(&package),
            vec!["iwe-domain depends on dioxus".to_string()]
        );
    }

    #[test]
    fn test_source_scan_finds_nested_forbidden_use() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("page");
        std::fs::create_dir_all(&nested).expect("create nested dir");
        std::fs::write(dir.path().join("lib.rs"), "use serde::Serialize;\n").expect("write lib");
        std::fs::write(
            nested.join("menu.rs"),
            "// menu state\nuse dioxus::prelude::*;\n",
        )
        .expect("write menu");
        std::fs::write(nested.join("notes.txt"), "use tokio::time;\n").expect("write notes");

        let violations = source_violations(dir.path()).expect("scan");

        assert_eq!(violations.len(), 1);
        assert!(violations[0].ends_with("menu.rs:2 uses dioxus"));
    }
}
