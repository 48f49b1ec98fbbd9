//! The transform stages of the pipeline, in application order.
//!
//! Every function here is a pure map over `image` buffers: given valid,
//! correctly-dimensioned input it cannot fail.

pub mod annotate;
pub mod centroid;
pub mod classify;
pub mod gray;
pub mod median;
pub mod morphology;
