//! Tracing hook for pre-scan work (lookups, seen-sets).
//!
//! Operators call `emit_span` right after draining one side eagerly, with
//! the sizes they observed. Without the `tracing` feature this compiles to
//! nothing.

#[cfg(feature = "tracing")]
pub fn emit_span(event: &str, fields: &[(&str, String)]) {
    let span = tracing::trace_span!("lazyq.prescan", event);
    let _entered = span.enter();
    for (name, value) in fields {
        tracing::trace!(%name, %value, "drained");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub fn emit_span(_event: &str, _fields: &[(&str, String)]) {}
