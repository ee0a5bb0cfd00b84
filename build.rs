use std::error::Error;
use std::process::Command;
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    let inside_git_checkout = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let mut builder = EmitBuilder::builder();
    builder.build_timestamp();

    // VERGEN_GIT_SHA is read with option_env!, so a source tarball still builds.
    if inside_git_checkout {
        builder.git_sha(true);
    }

    builder.emit()?;
    Ok(())
}
