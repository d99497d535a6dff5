//! Cross-crate tests: parser, codecs and evaluator working together.

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod serialization;

#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
