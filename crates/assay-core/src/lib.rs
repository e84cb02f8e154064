pub mod aggregate;
pub mod engine;
pub mod fields;
pub mod index;
pub mod linker;

pub use aggregate::PivotAggregator;
pub use engine::{METHOD_REF_FIELD, UNKNOWN_METHOD, build_pivot};
pub use fields::{Resolved, resolve_field, resolve_first, resolve_text, strip_parens};
pub use index::{SAMPLE_NAME_LABELS, SampleIndex};
pub use linker::{
    DIRECT_NAME_LABELS, SAMPLE_ID_LABELS, SAMPLE_REF_FIELD, SampleLink, UNKNOWN_KEY, UNKNOWN_NAME,
    link_sample,
};
