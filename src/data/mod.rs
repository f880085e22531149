/// Data layer: table types, loading, generation, summaries, charts, export.
///
/// Architecture:
/// ```text
///   .csv bytes ──► loader ─┐
///                          ├──► Table ──► summary  (shape, dtypes)
///   rng ─────────► synth ──┘       │
///                                  ├──► chart    (line / bar / histogram)
///                                  └──► export   (CSV bytes)
/// ```

pub mod chart;
pub mod export;
pub mod loader;
pub mod model;
pub mod summary;
pub mod synth;
