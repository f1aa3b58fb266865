mod backoff;
pub use backoff::BackoffKind;
