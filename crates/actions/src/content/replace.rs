use crate::helpers::coerce::coerce_to_int;

crate::define_action!(
    //
    // replace substrings, with an optional cap on the number of replacements
    //

    "replace",

    (
        string: RequiredArg<StringType> = Arg::named("string"),
        old_val: RequiredArg<StringType> = Arg::named("old_val"),
        new_val: RequiredArg<StringType> = Arg::named("new_val"),
        count: OptionalArg<AnyType> = Arg::named("count")
    )

    -> StringType
);

fn run() -> Runner {
    Runner::new(
        |Args {
             string,
             old_val,
             new_val,
             count,
         }| {
            let count = coerce_to_int(count.as_ref().unwrap_or(&Value::Null), "count", REPLACE_ALL)?;

            Ok(Value::String(replace_with_limit(
                &string, &old_val, &new_val, count,
            )))
        },
    )
}

/// Cap values below zero mean "replace every occurrence"
const REPLACE_ALL: i64 = -1;

/// Replace non-overlapping occurrences of `old_val`, left to right, earliest
/// match first
///
/// An empty `old_val` matches at every character boundary, both ends of the
/// subject included, so `new_val` gets interleaved through it (up to the cap).
fn replace_with_limit(string: &str, old_val: &str, new_val: &str, count: i64) -> String {
    if count < 0 {
        string.replace(old_val, new_val)
    } else {
        string.replacen(old_val, new_val, usize::try_from(count).unwrap_or(usize::MAX))
    }
}
