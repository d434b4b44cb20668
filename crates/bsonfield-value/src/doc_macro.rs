/// A declarative macro for building documents, in the spirit of `serde_json::json!`.
///
/// Keys are string literals. Values may be `null`, literals (including negative
/// numbers), nested `{ ... }` documents, `[ ... ]` arrays, or any expression
/// that converts into a [`Value`](crate::Value).
///
/// ```
/// use bsonfield_value::{doc, Value};
///
/// let doc = doc! {
///     "name": "Alice",
///     "age": 30,
///     "tags": ["a", "b"],
///     "address": { "city": "Paris", "zip": null },
/// };
/// assert_eq!(doc.get("age"), Some(&Value::Int32(30)));
/// ```
#[macro_export]
macro_rules! doc {
    // ========================================================================
    // Fields: `"key": value, ...`
    // ========================================================================
    (@fields $doc:ident;) => {};

    (@fields $doc:ident; $key:literal : $($rest:tt)+) => {
        $crate::doc!(@field $doc, $key; [] $($rest)+);
    };

    // Value tokens are collected until the next top-level comma.
    (@field $doc:ident, $key:literal; [$($value:tt)+] , $($rest:tt)*) => {
        $doc.insert($key, $crate::doc!(@value $($value)+));
        $crate::doc!(@fields $doc; $($rest)*);
    };

    (@field $doc:ident, $key:literal; [$($value:tt)+]) => {
        $doc.insert($key, $crate::doc!(@value $($value)+));
    };

    (@field $doc:ident, $key:literal; [$($value:tt)*] $next:tt $($rest:tt)*) => {
        $crate::doc!(@field $doc, $key; [$($value)* $next] $($rest)*);
    };

    // ========================================================================
    // Array elements
    // ========================================================================
    (@elements $array:ident; []) => {};

    (@elements $array:ident; [$($value:tt)+] , $($rest:tt)*) => {
        $array.push($crate::doc!(@value $($value)+));
        $crate::doc!(@elements $array; [] $($rest)*);
    };

    (@elements $array:ident; [$($value:tt)+]) => {
        $array.push($crate::doc!(@value $($value)+));
    };

    (@elements $array:ident; [$($value:tt)*] $next:tt $($rest:tt)*) => {
        $crate::doc!(@elements $array; [$($value)* $next] $($rest)*);
    };

    // ========================================================================
    // Values
    // ========================================================================
    (@value null) => {
        $crate::Value::Null
    };

    (@value [ $($elements:tt)* ]) => {{
        #[allow(unused_mut)]
        let mut array = $crate::Array::new();
        $crate::doc!(@elements array; [] $($elements)*);
        $crate::Value::Array(array)
    }};

    (@value { $($body:tt)* }) => {
        $crate::Value::Document($crate::doc!{ $($body)* })
    };

    (@value $($value:tt)+) => {
        $crate::Value::from($($value)+)
    };

    // ========================================================================
    // Entry points
    // ========================================================================
    () => {
        $crate::Document::new()
    };

    ($($body:tt)+) => {{
        #[allow(unused_mut)]
        let mut doc = $crate::Document::new();
        $crate::doc!(@fields doc; $($body)+);
        doc
    }};
}
