use crate::config::SiteConfig;

/// Platform tokens that mark a phone or tablet browser.
pub const MOBILE_TOKENS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

/// What the page knows about the client at the moment of asking.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub user_agent: Option<String>,
}

impl Viewport {
    pub fn new(width: f64, user_agent: Option<&str>) -> Self {
        Self {
            width,
            user_agent: user_agent.map(str::to_string),
        }
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_TOKENS
        .iter()
        .any(|token| ua.contains(&token.to_ascii_lowercase()))
}

pub fn classify(viewport: &Viewport, config: &SiteConfig) -> DeviceClass {
    if viewport.width <= config.mobile_breakpoint {
        return DeviceClass::Mobile;
    }
    if config.sniff_user_agent {
        if let Some(ua) = viewport.user_agent.as_deref() {
            if is_mobile_user_agent(ua) {
                return DeviceClass::Mobile;
            }
        }
    }
    DeviceClass::Desktop
}

pub fn crosses_breakpoint(old_width: f64, new_width: f64, breakpoint: f64) -> bool {
    (old_width <= breakpoint) != (new_width <= breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

    #[test]
    fn narrow_viewport_is_mobile() {
        let config = SiteConfig::default();
        assert_eq!(classify(&Viewport::new(768.0, Some(DESKTOP_UA)), &config), DeviceClass::Mobile);
        assert_eq!(classify(&Viewport::new(769.0, Some(DESKTOP_UA)), &config), DeviceClass::Desktop);
    }

    #[test]
    fn wide_tablet_is_mobile_when_sniffing() {
        let mut config = SiteConfig::default();
        let ipad = Viewport::new(1024.0, Some("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)"));
        assert_eq!(classify(&ipad, &config), DeviceClass::Mobile);

        config.sniff_user_agent = false;
        assert_eq!(classify(&ipad, &config), DeviceClass::Desktop);
    }

    #[test]
    fn classification_is_deterministic() {
        let config = SiteConfig::default();
        let viewport = Viewport::new(1280.0, Some(IPHONE_UA));
        let first = classify(&viewport, &config);
        for _ in 0..10 {
            assert_eq!(classify(&viewport, &config), first);
        }
    }

    #[test]
    fn user_agent_match_ignores_case() {
        assert!(is_mobile_user_agent("something ANDROID something"));
        assert!(is_mobile_user_agent("Opera Mini/8.0"));
        assert!(!is_mobile_user_agent(DESKTOP_UA));
    }

    #[test]
    fn missing_user_agent_falls_back_to_width() {
        let config = SiteConfig::default();
        assert_eq!(classify(&Viewport::new(1440.0, None), &config), DeviceClass::Desktop);
    }

    #[test]
    fn breakpoint_crossing() {
        assert!(crosses_breakpoint(1024.0, 600.0, 768.0));
        assert!(crosses_breakpoint(768.0, 769.0, 768.0));
        assert!(!crosses_breakpoint(1024.0, 900.0, 768.0));
        assert!(!crosses_breakpoint(320.0, 700.0, 768.0));
    }
}
