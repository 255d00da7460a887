// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to one pipeline
// step:
//
//   report.rs — the summary of a split run, rendered as a
//               terminal line or as JSON for scripts
//
// Reference: Rust Book §7 (Modules)

/// Split run report (summary line / JSON)
pub mod report;
