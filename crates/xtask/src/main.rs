use anyhow::Context;
use regex_lite::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Crate that must stay free of async runtime and timers
const PURE_CRATE: &str = "primkit-domain";
const PURE_CRATE_SRC: &str = "crates/domain/src";

/// Dependencies the pure crate may not take on
const FORBIDDEN_PURE_DEPS: &[&str] = &[
    "tokio",
    "async-trait",
    "futures-util",
    "tracing",
    "primkit-timers",
];

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
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal deps, `"dev"` or `"build"` otherwise
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
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let mut violations = Vec::new();

    let pure = metadata
        .packages
        .iter()
        .find(|p| p.name == PURE_CRATE)
        .with_context(|| format!("package {PURE_CRATE} not found in workspace"))?;
    for dep in forbidden_deps(pure) {
        violations.push(format!("{PURE_CRATE} depends on {dep}"));
    }

    let pattern = runtime_call_pattern()?;
    let src = metadata.workspace_root.join(PURE_CRATE_SRC);
    for file in rust_files(&src)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line, text) in find_runtime_calls(&pattern, &source) {
            violations.push(format!("{}:{line}: {text}", file.display()));
        }
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

/// Normal (non-dev) dependencies of `package` that are on the forbidden list.
fn forbidden_deps(package: &Package) -> Vec<&str> {
    package
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none())
        .map(|dep| dep.name.as_str())
        .filter(|name| FORBIDDEN_PURE_DEPS.contains(name))
        .collect()
}

fn runtime_call_pattern() -> anyhow::Result<Regex> {
    Regex::new(r"\btokio::|\bthread::sleep\b|\basync\s+fn\b|\.await\b")
        .context("compiling runtime call pattern")
}

/// Lines (1-based) that reach for a runtime, timer or async code.
fn find_runtime_calls(pattern: &Regex, source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("//")
        })
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(idx, line)| (idx + 1, line.trim().to_string()))
        .collect()
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Regex {
        runtime_call_pattern().unwrap()
    }

    fn package(deps: &[(&str, Option<&str>)]) -> Package {
        Package {
            name: PURE_CRATE.to_string(),
            dependencies: deps
                .iter()
                .map(|(name, kind)| Dependency {
                    name: name.to_string(),
                    kind: kind.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn test_forbidden_deps_flags_runtime() {
        let pkg = package(&[("serde", None), ("tokio", None), ("thiserror", None)]);
        assert_eq!(forbidden_deps(&pkg), vec!["tokio"]);
    }

    #[test]
    fn test_forbidden_deps_ignores_dev_dependencies() {
        let pkg = package(&[("tokio", Some("dev")), ("serde_json", Some("dev"))]);
        assert!(forbidden_deps(&pkg).is_empty());
    }

    #[test]
    fn test_find_runtime_calls_reports_line_numbers() {
        let source =
            "use serde::Serialize;\n\npub async fn wait() {\n    tokio::time::sleep(d).await;\n}\n";
        let hits = find_runtime_calls(&pattern(), source);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, 3);
        assert_eq!(hits[1].0, 4);
    }

    #[test]
    fn test_find_runtime_calls_skips_comments() {
        let source =
            "//! The delay lives in primkit-timers (tokio::time)\n// thread::sleep is banned\nfn pure() {}\n";
        assert!(find_runtime_calls(&pattern(), source).is_empty());
    }

    #[test]
    fn test_find_runtime_calls_flags_blocking_sleep() {
        let hits = find_runtime_calls(&pattern(), "    std::thread::sleep(d);");
        assert_eq!(hits, vec![(1, "std::thread::sleep(d);".to_string())]);
    }
}
