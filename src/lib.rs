//! Workspace-level integration tests for bm1pi. See `tests/`.
