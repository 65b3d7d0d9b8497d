// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str-likes into one owned String
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! front_matter {
    // Ordered front matter from `"key" => value` pairs.
    // Values: &str, String, i64, Option<_> of those (None → empty).
    ($($key:literal => $val:expr),+ $(,)?) => {{
        let mut fm = $crate::front_matter::FrontMatter::new();
        $(
            fm.push($key, $val);
        )+
        fm
    }};
}
