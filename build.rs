use std::env;
use std::process::Command;

const PREFIX: &str = "FINANCE_CORE_BUILD";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = run("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());
    let status = match run("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let rustc = run("rustc", &["--version"]).unwrap_or_else(|| "unknown".into());

    emit("HASH", &hash);
    emit("STATUS", status);
    emit("TIMESTAMP", &timestamp);
    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".into()));
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={PREFIX}_{key}={value}");
}

/// Trimmed stdout of a successful command, or `None` when it cannot run.
fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
