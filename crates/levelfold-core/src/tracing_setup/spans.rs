//! Span definitions per operation.

/// Create the span covering the factoring of one group.
#[macro_export]
macro_rules! factor_span {
    ($group:expr, $levels:expr) => {
        tracing::debug_span!("levelfold.factor", group = %$group, levels = $levels)
    };
}

/// Create the span covering the export of one named document.
#[macro_export]
macro_rules! export_span {
    ($name:expr) => {
        tracing::info_span!("levelfold.export", name = %$name)
    };
}
