// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe what a split IS:
//
//   subject.rs — subject keys and the per-subject file groups
//   error.rs   — the typed failure taxonomy of a split run
//   traits.rs  — the seam between "where samples come from"
//                and the splitting logic
//
// Rules for this layer:
//   - NO clap types
//   - NO file copying
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Subject keys and grouping of sample filenames by subject
pub mod subject;

/// Typed errors raised by the split pipeline
pub mod error;

/// Core abstractions that the data layer implements
pub mod traits;
