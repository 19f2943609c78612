use html::contains_ignore_ascii_case;

/// Platform quirks that change how numeric keyboards are requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserAgentQuirks {
    /// iPhone, iPad or iPod.
    pub apple_mobile: bool,
    pub firefox: bool,
}

impl UserAgentQuirks {
    pub fn from_user_agent(user_agent: &str) -> Self {
        const APPLE_MOBILE: [&[u8]; 3] = [b"iphone", b"ipad", b"ipod"];
        let apple_mobile = APPLE_MOBILE
            .iter()
            .any(|needle| contains_ignore_ascii_case(user_agent, needle));
        let firefox = contains_ignore_ascii_case(user_agent, b"firefox");
        Self {
            apple_mobile,
            firefox,
        }
    }
}
