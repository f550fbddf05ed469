pub const DEFAULT_NAME: &str = "Guest";

const BANNER: &str = "Hello, World!";

/// Render the banner and welcome lines for an argument vector.
///
/// The welcome line names `args[0]` when present (the empty string is a
/// valid name) and falls back to [`DEFAULT_NAME`] otherwise. Tokens past
/// the first are ignored.
pub fn render_lines(args: &[String]) -> [String; 2] {
    [
        BANNER.to_string(),
        format!("Welcome, {}", resolve_name(args)),
    ]
}

fn resolve_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or(DEFAULT_NAME)
}

/// Print the two greeting lines to stdout. Accepts every argument vector
/// shape; there is no error path.
pub fn run(args: &[String]) {
    for line in render_lines(args) {
        println!("{line}");
    }
}
