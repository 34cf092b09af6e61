//! Icons for CLI output

/// Marks where a Deployment entry came from
pub struct OriginIcon;

impl OriginIcon {
    /// Entry injected by synthesis
    pub const INJECTED: &'static str = "+";

    /// Entry supplied by the caller
    pub const CALLER: &'static str = "·";

    pub fn get_origin_icon(injected: bool) -> &'static str {
        if injected {
            Self::INJECTED
        } else {
            Self::CALLER
        }
    }

    pub fn get_origin_text(injected: bool) -> &'static str {
        if injected {
            "injected"
        } else {
            "caller"
        }
    }
}
