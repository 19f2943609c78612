use crate::user_agent::UserAgentQuirks;
use html::{Node, remove_attr, set_attr};

/// Validation pattern for digits and the minus sign.
pub const NUMERIC_PATTERN: &str = "[0-9-]*";

/// Ask for a numeric keyboard: `inputmode="numeric"` plus a digit pattern,
/// with the semantic `type` removed.
///
/// Apple mobile browsers get only the pattern. Firefox ignores both hints,
/// so it gets `type="tel"` instead.
pub fn apply_numeric_keyboard(node: &mut Node, quirks: UserAgentQuirks) {
    set_attr(node, "pattern", NUMERIC_PATTERN);
    set_attr(node, "inputmode", "numeric");
    remove_attr(node, "type");

    if quirks.apple_mobile {
        remove_attr(node, "inputmode");
    }

    if quirks.firefox {
        remove_attr(node, "inputmode");
        remove_attr(node, "pattern");
        set_attr(node, "type", "tel");
    }
}
