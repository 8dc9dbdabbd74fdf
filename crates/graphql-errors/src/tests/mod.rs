mod rendering_property_tests;
#[cfg(feature = "json")]
mod response_tests;
