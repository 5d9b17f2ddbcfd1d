#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Forces plain output even on a color capable terminal.
    pub no_color: bool,
    /// 0 prints everything, 1 hides the banner and headers,
    /// 2 prints nothing but the verdict words.
    pub quiet: u8,
    /// Prints the rejection reason next to an INVALID verdict.
    pub explain: bool,
}
