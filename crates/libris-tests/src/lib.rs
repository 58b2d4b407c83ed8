#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod stream_tests;
#[cfg(test)]
mod types_tests;
