pub(crate) mod diagnostics_sampler;
pub(crate) mod throttled_logger;
