//! Build metadata captured at compile time by `build.rs`.

pub(crate) fn git_commit_hash() -> &'static str {
    env!("GLIMMER_WEB_GIT_SHA")
}
