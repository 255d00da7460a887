// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish a split.
//
// Rules for this layer:
//   - No printing here (that's Layer 1)
//   - No clap types
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The train/test split workflow
pub mod split_use_case;
