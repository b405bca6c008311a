/// Turns one unit magnitude and its pluralized label into a display
/// fragment. The decomposition and suppression logic never touches the
/// rendering target; swap the implementation to emit something other
/// than HTML.
pub trait RenderBlock {
    fn block(&self, value: u64, label: &str) -> String;
}

/// `time-block` div markup as consumed by the countdown widget CSS.
pub struct HtmlBlocks;

impl RenderBlock for HtmlBlocks {
    fn block(&self, value: u64, label: &str) -> String {
        format!(
            "<div class=\"time-block\"><div class=\"time-value\">{value}</div><div class=\"time-label\">{label}</div></div>"
        )
    }
}
