//! Decorated console headers.

const TOTAL_WIDTH: usize = 60;
const EDGE_STARS: usize = 3;

/// Render `msg` centred in a three-line star box.
///
/// Long messages keep at least one space of padding on each side and simply
/// widen the middle line.
pub fn render_header(msg: &str) -> String {
    let msg_len = msg.chars().count();
    let padding = (TOTAL_WIDTH.saturating_sub(msg_len) / 2)
        .saturating_sub(EDGE_STARS)
        .max(1);
    let odd_fill = if msg_len % 2 == 1 { " " } else { "" };

    let border = "*".repeat(TOTAL_WIDTH);
    let edge = "*".repeat(EDGE_STARS);
    let pad = " ".repeat(padding);
    format!("{border}\n{edge}{pad}{msg}{odd_fill}{pad}{edge}\n{border}\n")
}
