//! Build script embedding git metadata for the version string.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only VERGEN_GIT_SHA is read, but the full set keeps rebuild triggers
    // consistent when HEAD moves.
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
