#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
    (format: $fmt:literal, $($arg:expr),+ $(,)?) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new(&format!($fmt, $($arg),+)).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        class: $class:expr,
        pattern: $pattern:expr
        $(, buckets: $buckets:expr)?
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            class: $class,
            pattern: $pattern,
            buckets: $crate::engine::BucketMask::empty() $(| $buckets)?,
        }
    }};
}
