//! Workspace-level integration tests for polyfft.
