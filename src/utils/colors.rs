/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Marker color, mirroring the map: orange-ish for shared markers, red for single ones.
pub fn color_for_cluster(multi: bool) -> &'static str {
    if multi { YELLOW } else { RED }
}

pub fn color_for_source(source: crate::models::position::SourceKind) -> &'static str {
    use crate::models::position::SourceKind;
    match source {
        SourceKind::Sensor => GREEN,
        SourceKind::Fallback => YELLOW,
        SourceKind::ManualSearch => BLUE,
    }
}

/// Operation color for the internal log listing.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" => GREEN,
        "import" => CYAN,
        "init" => BLUE,
        "migration_applied" => MAGENTA,
        _ => RESET,
    }
}

pub fn paint(color: &str, s: &str) -> String {
    format!("{color}{s}{RESET}")
}

pub fn grey(s: &str) -> String {
    paint(GREY, s)
}
