//! Workspace-level scenario tests live in `tests/`.
