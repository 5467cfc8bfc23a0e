use rand::Rng;

/// Generates an opaque trace-correlation identifier: a uniform random 64-bit
/// integer rendered as plain decimal digits.
///
/// Span and trace ids are generated independently for each request; the value
/// space makes collision across concurrent in-flight requests negligible.
pub fn generate_trace_id() -> String {
    rand::thread_rng().gen::<u64>().to_string()
}
