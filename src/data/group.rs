/// Group label of a sample name.
///
/// The text before the first `:` wins; without a colon, the text before the
/// first `_`; otherwise the whole name. The label is always trimmed.
///
/// ```text
/// German_Hamburg:GSM1031510  →  German_Hamburg
/// Ukrainian_Lviv             →  Ukrainian
/// Solo                       →  Solo
/// ```
pub fn infer_group(name: &str) -> &str {
    if let Some((label, _)) = name.split_once(':') {
        label.trim()
    } else if let Some((label, _)) = name.split_once('_') {
        label.trim()
    } else {
        name.trim()
    }
}
