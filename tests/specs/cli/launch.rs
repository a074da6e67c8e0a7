//! Launch behavior specs.
//!
//! The server invocation is swapped for `echo`/`false` via `session.server`
//! so these run without a Jupyter install. The launcher appends
//! `--no-browser --port N --ip ADDR`, which echo happily prints back.

use crate::prelude::*;

#[test]
fn launch_announces_url_then_runs_server() {
    let project = Project::new("server = \"echo serving\"\n");
    let spec = nbg()
        .args(&["launch", "--port", "10500"])
        .cwd(project.path())
        .passes();

    let stdout = spec.stdout();
    let announce_at = stdout.find("executing jupyter on http://").unwrap();
    let server_at = stdout.find("serving --no-browser --port 10500 --ip 127.0.0.1").unwrap();
    assert!(announce_at < server_at, "announce must precede server output");
}

#[test]
fn launch_announced_port_matches_server_port_flag() {
    let project = Project::new("server = \"echo serving\"\n");
    let spec = nbg()
        .args(&["launch", "--port", "10042"])
        .cwd(project.path())
        .passes();

    let stdout = spec.stdout();
    assert!(stdout.contains(":10042"), "announcement carries the port");
    assert!(stdout.contains("--port 10042"), "server gets the same port");
}

#[test]
fn launch_random_port_stays_in_configured_range() {
    let project = Project::new("port_min = 10100\nport_max = 10110\nserver = \"echo serving\"\n");
    for _ in 0..10 {
        let spec = nbg().args(&["launch"]).cwd(project.path()).passes();
        let stdout = spec.stdout();
        let port: u16 = stdout
            .lines()
            .find_map(|l| l.strip_prefix("executing jupyter on http://"))
            .and_then(|rest| rest.rsplit(':').next())
            .and_then(|p| p.trim().parse().ok())
            .unwrap();
        assert!((10100..=10110).contains(&port), "port {port} out of range");
    }
}

#[test]
fn launch_missing_env_fails_without_starting_server() {
    let project = Project::new("server = \"echo serving\"\n");
    project.break_env();
    nbg()
        .args(&["launch", "--port", "10500"])
        .cwd(project.path())
        .fails()
        .stderr_has("activation script not found")
        .stdout_lacks("executing jupyter")
        .stdout_lacks("serving");
}

#[test]
fn launch_missing_user_fails() {
    let project = Project::new("server = \"echo serving\"\n");
    nbg()
        .args(&["launch", "--port", "10500"])
        .cwd(project.path())
        .env_remove("USER")
        .fails()
        .stderr_has("USER is not set");
}

#[test]
fn launch_passes_through_server_exit_code() {
    let project = Project::new("server = \"bash -c 'exit 7' --\"\n");
    nbg()
        .args(&["launch", "--port", "10500"])
        .cwd(project.path())
        .fails()
        .exits_with(7);
}

#[test]
fn launch_out_of_range_port_rejected() {
    let project = Project::new("port_min = 10000\nport_max = 10010\nserver = \"echo hi\"\n");
    nbg()
        .args(&["launch", "--port", "11999"])
        .cwd(project.path())
        .fails()
        .stderr_has("outside the configured range");
}
