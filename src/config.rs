//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site. There
//! is no runtime configuration: everything here is baked into the bundle.

use wynn_core::Parallax;

// =============================================================================
// Token Metadata
// =============================================================================

/// Ticker shown in the navbar logo and footer.
pub const TOKEN_SYMBOL: &str = "$WYNN";

/// Footer subtitle.
pub const TOKEN_TAGLINE: &str = "Official Meme Token";

/// On-chain mint address exposed by the copy widget.
pub const CONTRACT_ADDRESS: &str = "E9uUgGXJ77AVmaqVhN544oz644VUPBGU6r4qUaeppump";

// =============================================================================
// Price Data
// =============================================================================

/// Chain segment of the pair identifier.
pub const PAIR_CHAIN: &str = "solana";

/// Liquidity pair tracked by the market-cap badge and chart.
pub const PAIR_ADDRESS: &str = "B9wKM6pjxsGamAbYm78YBsbFvKpDQFnQ3a4csnGKiKiM";

/// Pair lookup endpoint (chain and pair are appended).
pub const PRICE_API_BASE: &str = "https://api.dexscreener.com/latest/dex/pairs";

// =============================================================================
// Timing
// =============================================================================

/// Market-cap refresh period in milliseconds.
pub const MARKET_CAP_POLL_MS: u32 = 30_000;

/// How long the copy confirmation stays visible after the last copy.
pub const COPY_RESET_MS: u32 = 2_000;

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Scroll-reveal settings.
pub mod reveal {
    /// Root margin: the viewport is inset 100px on every side, so an element
    /// reveals once it is clearly inside the screen.
    pub const ROOT_MARGIN: &str = "-100px";
    /// Stagger between roadmap cards, in seconds.
    pub const STAGGER_SECS: f64 = 0.1;
}

// =============================================================================
// Parallax
// =============================================================================

/// Hero image drifts down over the first 500px of scroll.
pub const HERO_PARALLAX: Parallax = Parallax::new((0.0, 500.0), (0.0, 200.0));

/// About image drifts up over the same range.
pub const ABOUT_PARALLAX: Parallax = Parallax::new((0.0, 500.0), (0.0, -150.0));

// =============================================================================
// Links
// =============================================================================

/// Trading venue for the call-to-action.
pub const BUY_URL: &str = "https://pump.fun/coin/E9uUgGXJ77AVmaqVhN544oz644VUPBGU6r4qUaeppump";

pub const TWITTER_URL: &str = "https://x.com/JamesWynnReal";
pub const TELEGRAM_URL: &str = "https://t.me/wynnmeme";

/// Site author credit.
pub const AUTHOR_HANDLE: &str = "@mittoonsol";
pub const AUTHOR_URL: &str = "https://x.com/mittoonsol";

/// Section anchor targeted by "Get Started" and "Start Trading".
pub const BUY_SECTION_ID: &str = "buy";

/// In-page navigation entry.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Roadmap", href: "#roadmap" },
    NavLink { label: "Chart", href: "#chart" },
    NavLink { label: "Buy", href: "#buy" },
];

// =============================================================================
// Static Assets
// =============================================================================

pub const HERO_IMAGE: &str =
    "https://pbs.twimg.com/profile_images/2005246915915444224/_QfyGK2O_400x400.jpg";
pub const ABOUT_IMAGE: &str = "/wynn_about.png";
pub const PREVIEW_IMAGE: &str = "/view_full.png";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
