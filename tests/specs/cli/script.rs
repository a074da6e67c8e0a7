//! Batch script rendering specs

use crate::prelude::*;

#[test]
fn script_renders_default_directive_header() {
    let project = Project::new("");
    let spec = nbg().args(&["script"]).cwd(project.path()).passes();

    let header: Vec<String> = spec
        .stdout()
        .lines()
        .take(7)
        .map(str::to_string)
        .collect();
    similar_asserts::assert_eq!(
        header.join("\n"),
        "#!/bin/bash\n\
         #$ -cwd\n\
         #$ -V\n\
         #$ -q short.qc\n\
         #$ -pe shmem 2\n\
         #$ -N jupyter\n\
         #$ -o ./jupyter.log"
    );
}

#[test]
fn script_body_reinvokes_the_launcher() {
    let project = Project::new("");
    nbg()
        .args(&["script"])
        .cwd(project.path())
        .passes()
        .stdout_has("exec ")
        .stdout_has(" launch");
}

#[test]
fn script_honors_job_overrides() {
    let project = Project::new("[job]\nname = \"nb-rna\"\nqueue = \"long.qc\"\nslots = 4\n");
    nbg()
        .args(&["script"])
        .cwd(project.path())
        .passes()
        .stdout_has("#$ -q long.qc")
        .stdout_has("#$ -pe shmem 4")
        .stdout_has("#$ -N nb-rna")
        .stdout_has("#$ -o ./nb-rna.log");
}

#[test]
fn script_log_dir_flag_moves_the_log() {
    let project = Project::new("");
    nbg()
        .args(&["script", "--log-dir", "/data/logs"])
        .cwd(project.path())
        .passes()
        .stdout_has("#$ -o /data/logs/jupyter.log");
}

#[test]
fn script_with_explicit_config_forwards_it_to_launch() {
    let project = Project::new("");
    let config = project.config_path();
    nbg()
        .args(&["script", "--config", &config.display().to_string()])
        .passes()
        .stdout_has(&format!("--config {}", config.display()));
}
