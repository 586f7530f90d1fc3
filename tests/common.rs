#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cl() -> Command {
    cargo_bin_cmd!("crewlog")
}

/// Path to a config file that does not exist, so a session runs on the
/// built-in defaults without touching the user's home directory.
pub fn absent_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewlog_absent.yml", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Join session commands into one stdin script, `quit` included.
pub fn script(lines: &[&str]) -> String {
    let mut s = lines.join("\n");
    s.push_str("\nquit\n");
    s
}

/// Scripted session on default config, ready to assert on.
pub fn session(name: &str, lines: &[&str]) -> Command {
    let cfg = absent_config(name);
    let mut cmd = cl();
    cmd.args(["--config", &cfg]);
    cmd.write_stdin(script(lines));
    cmd
}
