// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers for one run.
//
// Rules for this layer:
//   - No parsing or normalisation logic here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination

// The load → normalise → chunk → write workflow
pub mod prepare_use_case;
