use std::fmt;

/// Writes `items` comma-separated between `open` and `close`.
pub(crate) fn write_delimited<I>(
    formatter: &mut fmt::Formatter<'_>,
    open: char,
    close: char,
    items: I,
) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    write!(formatter, "{open}")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            formatter.write_str(",")?;
        }
        write!(formatter, "{item}")?;
    }
    write!(formatter, "{close}")
}
