//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuCheck as Check, LuCopy as Copy,
        LuExternalLink as ExternalLink, LuMenu as Menu, LuTrendingUp as TrendingUp,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBoxArrowUpRight as ExternalLink, BsCheckLg as Check,
        BsClipboard as Copy, BsExclamationTriangle as Warning, BsGraphUpArrow as TrendingUp,
        BsList as Menu, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(COPY, Copy);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(MENU, Menu);
themed_icon!(TRENDING_UP, TrendingUp);
themed_icon!(WARNING, Warning);
