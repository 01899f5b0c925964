/// A field counts as present when it is a non-empty string. Whitespace is a value.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
