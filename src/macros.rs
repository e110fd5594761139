/// Construct a [`Value`][crate::Value] map using a syntax close to the text
/// notation.
///
/// The macro body is the inside of a map. Keys are identifiers or string
/// literals. Values are `null`, nested `[...]` lists and `{...}` maps, or any
/// expression convertible using `Value::from`.
///
/// # Examples
///
/// ```
/// use strata::Value;
///
/// let value = strata::value! {
///     config: {
///         enabled: true,
///         retries: 3,
///         name: "strata",
///         empty: null,
///         tags: ["a", "b"],
///         "content-type": strata::frame::CONTENT_TYPE,
///         digest: Value::bytes([0x9f, 0x86]),
///     }
/// };
/// assert_eq!(value.get("config").and_then(|c| c.get("retries")), Some(&Value::Int(3)));
/// ```
#[macro_export]
macro_rules! value {
    ($($tt:tt)*) => {
        $crate::_value!({ $($tt)* })
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value {
    //////////////////////////////////////////////////////////////////////////
    // TT muncher for the inside of a list [...]. Produces a vector of the
    // elements.
    //
    // Must be invoked as: _value!(@list [] $($tt)*)
    //////////////////////////////////////////////////////////////////////////

    // Done.
    (@list [$($elems:expr,)*]) => {
        $crate::_value_vec![$($elems,)*]
    };

    // Next element is `null`.
    (@list [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::Value::Null,] $($($rest)*)?)
    };

    // Next element is a list.
    (@list [$($elems:expr,)*] [$($list:tt)*] $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!([$($list)*]),] $($($rest)*)?)
    };

    // Next element is a map.
    (@list [$($elems:expr,)*] {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!({$($map)*}),] $($($rest)*)?)
    };

    // Next element is an expression followed by a comma.
    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)* $crate::Value::from($next),] $($rest)*)
    };

    // Last element is an expression with no trailing comma.
    (@list [$($elems:expr,)*] $last:expr) => {
        $crate::_value!(@list [$($elems,)* $crate::Value::from($last),])
    };

    //////////////////////////////////////////////////////////////////////////
    // TT muncher for the inside of a map {...}. Each entry is inserted into
    // the given map variable.
    //
    // Must be invoked as: _value!(@map $map $($tt)*)
    //////////////////////////////////////////////////////////////////////////

    // Done.
    (@map $map:ident) => {};

    // Next value is `null`.
    (@map $map:ident $key:tt : null $(, $($rest:tt)*)?) => {
        let _ = $map.insert($crate::_value_key!($key), $crate::Value::Null);
        $crate::_value!(@map $map $($($rest)*)?);
    };

    // Next value is a list.
    (@map $map:ident $key:tt : [$($list:tt)*] $(, $($rest:tt)*)?) => {
        let _ = $map.insert($crate::_value_key!($key), $crate::_value!([$($list)*]));
        $crate::_value!(@map $map $($($rest)*)?);
    };

    // Next value is a map.
    (@map $map:ident $key:tt : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        let _ = $map.insert($crate::_value_key!($key), $crate::_value!({$($inner)*}));
        $crate::_value!(@map $map $($($rest)*)?);
    };

    // Next value is an expression followed by a comma.
    (@map $map:ident $key:tt : $value:expr, $($rest:tt)*) => {
        let _ = $map.insert($crate::_value_key!($key), $crate::Value::from($value));
        $crate::_value!(@map $map $($rest)*);
    };

    // Last value is an expression with no trailing comma.
    (@map $map:ident $key:tt : $value:expr) => {
        let _ = $map.insert($crate::_value_key!($key), $crate::Value::from($value));
    };

    //////////////////////////////////////////////////////////////////////////
    // The main implementation.
    //////////////////////////////////////////////////////////////////////////

    (null) => {
        $crate::Value::Null
    };

    ([]) => {
        $crate::Value::List($crate::_value_vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::List($crate::_value!(@list [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Map($crate::value::Map::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Value::Map({
            let mut map = $crate::value::Map::new();
            $crate::_value!(@map map $($tt)+);
            map
        })
    };

    // Default to `From` implementation.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value_vec {
    ($($content:tt)*) => {
        ::std::vec![$($content)*]
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value_key {
    ($key:ident) => {
        ::std::string::String::from(::std::stringify!($key))
    };
    ($key:literal) => {
        ::std::string::String::from($key)
    };
}
