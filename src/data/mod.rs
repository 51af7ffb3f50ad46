/// Data layer: parsing, validation, grouping and averaging of G25 samples.
///
/// Architecture:
/// ```text
///   input.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip blank/# lines → record → validate → Vec<Sample>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  simple mean, or group (by label) → mean → mean of means
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  format   │  name,v1,...,v25
///   └──────────┘
/// ```

pub mod aggregate;
pub mod format;
pub mod group;
pub mod loader;
pub mod model;
pub mod record;
pub mod validate;
